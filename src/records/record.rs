use crate::game::Action;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// One player's observation in one round of one trial.
///
/// Columns are matched by header name, so field order in a file does not
/// matter and unknown columns are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// 0-based independent repetition.
    pub trial: usize,
    /// 1-based round within the trial.
    pub round: usize,
    pub player: String,
    pub action: Action,
    pub payoff: Utility,
    pub epsilon: Probability,
}

impl TrialRecord {
    /// Total order over (player, epsilon, round, trial).
    pub fn cmp_key(&self, other: &Self) -> std::cmp::Ordering {
        self.player
            .cmp(&other.player)
            .then(self.epsilon.total_cmp(&other.epsilon))
            .then(self.round.cmp(&other.round))
            .then(self.trial.cmp(&other.trial))
    }
}
