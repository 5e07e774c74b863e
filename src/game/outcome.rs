use super::*;

/// What happened in one past round, from one player's point of view.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Outcome {
    mine: Action,
    theirs: Action,
}

impl Outcome {
    pub fn new(mine: Action, theirs: Action) -> Self {
        Self { mine, theirs }
    }
    pub fn mine(&self) -> Action {
        self.mine
    }
    pub fn theirs(&self) -> Action {
        self.theirs
    }
    /// The same round seen from the other side of the table.
    pub fn mirror(&self) -> Self {
        Self::new(self.theirs, self.mine)
    }
    /// All four joint outcomes in CC, CD, DC, DD order.
    pub fn exhaust() -> [Self; 4] {
        [
            Self::new(Action::Cooperate, Action::Cooperate),
            Self::new(Action::Cooperate, Action::Defect),
            Self::new(Action::Defect, Action::Cooperate),
            Self::new(Action::Defect, Action::Defect),
        ]
    }
}

/// Position in CC, CD, DC, DD order.
impl From<Outcome> for usize {
    fn from(outcome: Outcome) -> Self {
        usize::from(outcome.mine) * 2 + usize::from(outcome.theirs)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.mine, self.theirs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaust_is_indexed_in_order() {
        for (i, outcome) in Outcome::exhaust().into_iter().enumerate() {
            assert_eq!(i, usize::from(outcome));
        }
    }

    #[test]
    fn display_reads_mine_then_theirs() {
        let outcome = Outcome::new(Action::Cooperate, Action::Defect);
        assert_eq!(outcome.to_string(), "CD");
        assert_eq!(outcome.mirror().to_string(), "DC");
    }
}
