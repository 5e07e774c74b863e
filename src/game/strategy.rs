use super::*;
use crate::*;
use rand::Rng;
use rand::rngs::SmallRng;

/// Chooses the next action from a player's joint history.
///
/// `history` holds one [`Outcome`] per past round, oldest first, as seen
/// by the choosing player.
pub trait Strategy: Send {
    fn select(&mut self, history: &[Outcome], rng: &mut SmallRng) -> Action;
}

/// Always cooperates.
pub struct Cooperate;

impl Strategy for Cooperate {
    fn select(&mut self, _: &[Outcome], _: &mut SmallRng) -> Action {
        Action::Cooperate
    }
}

/// Cooperates first, then repeats the opponent's last action.
pub struct TitForTat;

impl Strategy for TitForTat {
    fn select(&mut self, history: &[Outcome], _: &mut SmallRng) -> Action {
        history
            .last()
            .map(Outcome::theirs)
            .unwrap_or(Action::Cooperate)
    }
}

/// Cooperates with a fixed probability, ignoring history.
pub struct Random {
    cooperate: Probability,
}

impl Random {
    pub fn new(cooperate: Probability) -> Self {
        Self { cooperate }
    }
}

impl Strategy for Random {
    fn select(&mut self, _: &[Outcome], rng: &mut SmallRng) -> Action {
        if rng.random::<Probability>() < self.cooperate {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Memory-one lookup: probability of cooperating after each joint outcome.
///
/// Rules are indexed in CC, CD, DC, DD order of (my last, their last).
/// The opening move, with no history, is C.
pub struct Lookup {
    rules: [Probability; 4],
}

impl Lookup {
    /// Rules from P(C | CC), P(C | CD), P(C | DC), P(C | DD).
    pub fn joint(cc: Probability, cd: Probability, dc: Probability, dd: Probability) -> Self {
        Self {
            rules: [cc, cd, dc, dd],
        }
    }
    pub fn rule(&self, outcome: Outcome) -> Probability {
        self.rules[usize::from(outcome)]
    }
}

/// Keeps cooperating while the opponent cooperated, with exploration rate
/// `epsilon` as the chance of leaving that pattern.
impl From<Probability> for Lookup {
    fn from(epsilon: Probability) -> Self {
        Self::joint(1.0 - epsilon, epsilon, 1.0 - epsilon, epsilon)
    }
}

impl Strategy for Lookup {
    fn select(&mut self, history: &[Outcome], rng: &mut SmallRng) -> Action {
        match history.last() {
            None => Action::Cooperate,
            Some(outcome) if rng.random::<Probability>() < self.rule(*outcome) => {
                Action::Cooperate
            }
            Some(_) => Action::Defect,
        }
    }
}

/// Flips the inner strategy's choice with probability `epsilon`.
pub struct Mistaken {
    epsilon: Probability,
    inner: Box<dyn Strategy>,
}

impl Mistaken {
    pub fn new(epsilon: Probability, inner: Box<dyn Strategy>) -> Self {
        Self { epsilon, inner }
    }
}

impl Strategy for Mistaken {
    fn select(&mut self, history: &[Outcome], rng: &mut SmallRng) -> Action {
        let action = self.inner.select(history, rng);
        if rng.random::<Probability>() < self.epsilon {
            action.flip()
        } else {
            action
        }
    }
}

/// Selectable strategy families for a sweep.
///
/// `Random` cooperates with the sweep's `cooperate` probability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Kind {
    #[default]
    Lookup,
    TitForTat,
    Random,
    Cooperate,
}

impl Kind {
    /// Builds the strategy for exploration rate `epsilon`, wrapped in
    /// mistakes at the same rate.
    pub fn build(self, epsilon: Probability, cooperate: Probability) -> Box<dyn Strategy> {
        let inner: Box<dyn Strategy> = match self {
            Self::Lookup => Box::new(Lookup::from(epsilon)),
            Self::TitForTat => Box::new(TitForTat),
            Self::Random => Box::new(Random::new(cooperate)),
            Self::Cooperate => Box::new(Cooperate),
        };
        Box::new(Mistaken::new(epsilon, inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    fn history(pairs: &[(Action, Action)]) -> Vec<Outcome> {
        pairs.iter().map(|(a, b)| Outcome::new(*a, *b)).collect()
    }

    #[test]
    fn tit_for_tat_echoes_opponent() {
        let ref mut rng = rng();
        let mut tft = TitForTat;
        assert_eq!(tft.select(&[], rng), Action::Cooperate);
        let h = history(&[(Action::Cooperate, Action::Defect)]);
        assert_eq!(tft.select(&h, rng), Action::Defect);
        let h = history(&[
            (Action::Cooperate, Action::Defect),
            (Action::Defect, Action::Cooperate),
        ]);
        assert_eq!(tft.select(&h, rng), Action::Cooperate);
    }

    #[test]
    fn mistakes_never_at_zero() {
        let ref mut rng = rng();
        let mut s = Mistaken::new(0.0, Box::new(Cooperate));
        assert!((0..1000).all(|_| s.select(&[], rng) == Action::Cooperate));
    }

    #[test]
    fn mistakes_always_at_one() {
        let ref mut rng = rng();
        let mut s = Mistaken::new(1.0, Box::new(Cooperate));
        assert!((0..1000).all(|_| s.select(&[], rng) == Action::Defect));
    }

    #[test]
    fn lookup_opens_with_cooperation() {
        let ref mut rng = rng();
        let mut s = Lookup::joint(0.0, 0.0, 0.0, 0.0);
        assert_eq!(s.select(&[], rng), Action::Cooperate);
        let h = history(&[(Action::Cooperate, Action::Cooperate)]);
        assert_eq!(s.select(&h, rng), Action::Defect);
    }

    #[test]
    fn lookup_follows_deterministic_rules() {
        let ref mut rng = rng();
        let mut s = Lookup::from(0.0);
        for outcome in Outcome::exhaust() {
            let expected = if outcome.theirs().is_cooperate() {
                Action::Cooperate
            } else {
                Action::Defect
            };
            assert_eq!(s.select(&[outcome], rng), expected);
        }
    }

    #[test]
    fn random_tracks_probability() {
        let ref mut rng = rng();
        let mut s = Random::new(0.25);
        let n = 20_000;
        let c = (0..n)
            .filter(|_| s.select(&[], rng).is_cooperate())
            .count();
        let p = c as Probability / n as Probability;
        assert!((p - 0.25).abs() < 0.02);
    }
}
