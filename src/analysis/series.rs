use super::*;
use crate::records::TrialRecord;
use crate::*;

/// Per-round statistics of one (player, epsilon) group.
///
/// Index `i` describes round `i + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    payoff: Vec<Utility>,
    cooperation: Vec<Probability>,
}

impl Series {
    /// Mean payoff across trials, per round.
    pub fn payoff(&self) -> &[Utility] {
        &self.payoff
    }
    /// Fraction of trials that played C, per round.
    pub fn cooperation(&self) -> &[Probability] {
        &self.cooperation
    }
    pub fn rounds(&self) -> usize {
        self.cooperation.len()
    }
}

impl From<&Grid<&TrialRecord>> for Series {
    fn from(grid: &Grid<&TrialRecord>) -> Self {
        let payoff = grid
            .map(|r| r.payoff)
            .rows()
            .map(|row| row.iter().sum::<Utility>() / row.len() as Utility)
            .collect();
        let cooperation = grid
            .map(|r| r.action.is_cooperate())
            .rows()
            .map(|row| row.iter().filter(|c| **c).count() as Probability / row.len() as Probability)
            .collect();
        Self {
            payoff,
            cooperation,
        }
    }
}
