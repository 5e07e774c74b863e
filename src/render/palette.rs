use super::*;
use crate::analysis::Epsilon;
use crate::*;

/// Colors assigned to the distinct exploration rates of one figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    epsilons: Vec<Epsilon>,
    swatches: Vec<Swatch>,
}

impl Palette {
    /// Samples `ramp` evenly across `epsilons`, which should be sorted and distinct.
    pub fn new(ramp: &Ramp, epsilons: &[Epsilon]) -> Self {
        Self {
            epsilons: epsilons.to_vec(),
            swatches: ramp.sample(epsilons.len()),
        }
    }
    /// Index of the exploration rate closest to `epsilon`.
    /// Exact ties go to the lower index.
    pub fn nearest(&self, epsilon: Probability) -> Option<usize> {
        self.epsilons
            .iter()
            .map(|e| e.distance(epsilon))
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)
    }
    /// Color of the exploration rate closest to `epsilon`.
    pub fn color(&self, epsilon: Probability) -> Option<Swatch> {
        self.nearest(epsilon).map(|i| self.swatches[i])
    }
    /// Legend entries in ascending epsilon order.
    pub fn entries(&self) -> impl Iterator<Item = (Epsilon, Swatch)> + '_ {
        self.epsilons.iter().copied().zip(self.swatches.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(values: &[Probability]) -> Palette {
        let epsilons = values.iter().copied().map(Epsilon::from).collect::<Vec<_>>();
        Palette::new(&Ramp::default(), &epsilons)
    }

    #[test]
    fn middle_epsilon_takes_ramp_midpoint() {
        let palette = palette(&[0.0, 0.5, 1.0]);
        let ramp = Ramp::default();
        assert_eq!(palette.color(0.5), Some(ramp.at(0.5)));
        assert_eq!(palette.color(0.0), Some(ramp.at(0.0)));
        assert_eq!(palette.color(1.0), Some(ramp.at(1.0)));
    }

    #[test]
    fn single_epsilon_takes_first_color() {
        let palette = palette(&[0.025]);
        assert_eq!(palette.color(0.025), Some(FIVETHIRTYEIGHT[0]));
    }

    #[test]
    fn drifted_values_snap_to_nearest() {
        let palette = palette(&[0.0, 0.025, 0.05, 0.075, 0.1]);
        assert_eq!(palette.nearest(0.1 * 0.25), Some(1));
        assert_eq!(palette.nearest(0.07500000000000001), Some(3));
        assert_eq!(palette.nearest(0.2), Some(4));
    }

    #[test]
    fn exact_ties_go_to_lower_index() {
        let palette = palette(&[0.0, 0.5, 1.0]);
        assert_eq!(palette.nearest(0.25), Some(0));
        assert_eq!(palette.nearest(0.75), Some(1));
    }

    #[test]
    fn empty_palette_has_no_colors() {
        let palette = palette(&[]);
        assert_eq!(palette.nearest(0.1), None);
        assert_eq!(palette.entries().count(), 0);
    }
}
