use crate::*;

/// Exploration rate usable as an ordered map key.
///
/// Ordering and equality follow [`f64::total_cmp`], so distinct bit
/// patterns stay distinct and NaN sorts last instead of poisoning maps.
#[derive(Debug, Clone, Copy)]
pub struct Epsilon(Probability);

impl Epsilon {
    pub fn value(&self) -> Probability {
        self.0
    }
    /// Absolute difference to another exploration rate.
    pub fn distance(&self, other: Probability) -> Probability {
        (self.0 - other).abs()
    }
}

impl From<Probability> for Epsilon {
    fn from(p: Probability) -> Self {
        Self(p)
    }
}
impl From<Epsilon> for Probability {
    fn from(e: Epsilon) -> Self {
        e.0
    }
}

impl Eq for Epsilon {}
impl PartialEq for Epsilon {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}
impl Ord for Epsilon {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}
impl PartialOrd for Epsilon {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Epsilon {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
