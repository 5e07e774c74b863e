use crate::*;
use plotters::style::RGBColor;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Swatch(pub u8, pub u8, pub u8);

impl From<Swatch> for RGBColor {
    fn from(Swatch(r, g, b): Swatch) -> Self {
        RGBColor(r, g, b)
    }
}

impl std::fmt::Display for Swatch {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// FiveThirtyEight's color cycle.
pub const FIVETHIRTYEIGHT: [Swatch; 6] = [
    Swatch(0x00, 0x8f, 0xd5),
    Swatch(0xfc, 0x4f, 0x30),
    Swatch(0xe5, 0xae, 0x38),
    Swatch(0x6d, 0x90, 0x4f),
    Swatch(0x8b, 0x8b, 0x8b),
    Swatch(0x81, 0x0f, 0x7c),
];

/// A fixed list of colors addressed by fraction in [0, 1].
///
/// Lookup is discrete: fraction `f` selects entry `floor(f · n)`, with
/// `f = 1` folded into the last entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp(Vec<Swatch>);

impl Ramp {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Color at fraction `f`, clamped to [0, 1].
    pub fn at(&self, f: Probability) -> Swatch {
        let n = self.0.len();
        let i = (f.clamp(0.0, 1.0) * n as Probability).floor() as usize;
        self.0[i.min(n - 1)]
    }
    /// `count` colors at fractions `i / (count - 1)`; a single color sits at 0.
    pub fn sample(&self, count: usize) -> Vec<Swatch> {
        match count {
            0 => Vec::new(),
            1 => vec![self.at(0.0)],
            n => (0..n)
                .map(|i| self.at(i as Probability / (n - 1) as Probability))
                .collect(),
        }
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self(FIVETHIRTYEIGHT.to_vec())
    }
}

impl TryFrom<Vec<Swatch>> for Ramp {
    type Error = anyhow::Error;
    fn try_from(swatches: Vec<Swatch>) -> Result<Self, Self::Error> {
        if swatches.is_empty() {
            anyhow::bail!("color ramp needs at least one swatch");
        }
        Ok(Self(swatches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_first_and_last() {
        let ramp = Ramp::default();
        assert_eq!(ramp.at(0.0), FIVETHIRTYEIGHT[0]);
        assert_eq!(ramp.at(1.0), FIVETHIRTYEIGHT[5]);
        assert_eq!(ramp.at(-3.0), FIVETHIRTYEIGHT[0]);
        assert_eq!(ramp.at(7.0), FIVETHIRTYEIGHT[5]);
    }

    #[test]
    fn sample_spreads_evenly() {
        let ramp = Ramp::default();
        assert_eq!(ramp.sample(1), vec![FIVETHIRTYEIGHT[0]]);
        assert_eq!(
            ramp.sample(3),
            vec![FIVETHIRTYEIGHT[0], ramp.at(0.5), FIVETHIRTYEIGHT[5]]
        );
        assert_eq!(ramp.at(0.5), FIVETHIRTYEIGHT[3]);
        let five = ramp.sample(5);
        assert_eq!(five.len(), 5);
        assert_eq!(five[4], FIVETHIRTYEIGHT[5]);
        assert!(ramp.sample(0).is_empty());
    }

    #[test]
    fn empty_ramps_are_rejected() {
        assert!(Ramp::try_from(Vec::new()).is_err());
        assert!(Ramp::try_from(vec![Swatch(1, 2, 3)]).is_ok());
    }

    #[test]
    fn displays_as_hex() {
        assert_eq!(FIVETHIRTYEIGHT[0].to_string(), "#008fd5");
    }
}
