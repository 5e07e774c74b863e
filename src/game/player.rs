use super::*;
use rand::rngs::SmallRng;

/// A named participant with its own strategy and memory of past rounds.
pub struct Player {
    name: String,
    strategy: Box<dyn Strategy>,
    history: Vec<Outcome>,
    action: Action,
}

impl Player {
    pub fn new(name: String, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name,
            strategy,
            history: Vec::new(),
            action: Action::Cooperate,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn history(&self) -> &[Outcome] {
        &self.history
    }
    /// Action committed in the most recent round.
    pub fn action(&self) -> Action {
        self.action
    }
    /// Chooses this round's action from the remembered history.
    pub fn choose(&mut self, rng: &mut SmallRng) -> Action {
        self.strategy.select(&self.history, rng)
    }
    /// Commits this round's action and remembers the joint outcome.
    pub fn commit(&mut self, outcome: Outcome) {
        self.action = outcome.mine();
        self.history.push(outcome);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        for outcome in self.history.iter() {
            write!(f, " {}", outcome.mine())?;
        }
        Ok(())
    }
}
