use super::*;
use crate::*;

/// Symmetric two-player payoff matrix indexed `[mine][theirs]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoffMatrix([[i32; 2]; 2]);

impl PayoffMatrix {
    /// Payoff for playing `mine` against `theirs`.
    pub fn payoff(&self, mine: Action, theirs: Action) -> i32 {
        self.0[usize::from(mine)][usize::from(theirs)]
    }
    /// Payoffs for both players of one round.
    pub fn settle(&self, a: Action, b: Action) -> [i32; N] {
        [self.payoff(a, b), self.payoff(b, a)]
    }
}

impl Default for PayoffMatrix {
    fn default() -> Self {
        Self(PAYOFFS)
    }
}

impl From<[[i32; 2]; 2]> for PayoffMatrix {
    fn from(matrix: [[i32; 2]; 2]) -> Self {
        Self(matrix)
    }
}
