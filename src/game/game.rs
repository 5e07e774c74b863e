use super::*;
use crate::records::TrialRecord;
use crate::*;
use rand::rngs::SmallRng;

/// One trial of the iterated dilemma between two players.
///
/// Both players choose simultaneously each round from a snapshot of their
/// own histories; only then are the choices committed.
pub struct Game {
    trial: usize,
    epsilon: Probability,
    players: [Player; N],
    payoffs: PayoffMatrix,
    rng: SmallRng,
}

impl Game {
    pub fn new(
        trial: usize,
        epsilon: Probability,
        players: [Player; N],
        payoffs: PayoffMatrix,
        rng: SmallRng,
    ) -> Self {
        Self {
            trial,
            epsilon,
            players,
            payoffs,
            rng,
        }
    }
    /// Two players `Player 1` and `Player 2` of the same strategy kind.
    pub fn pair(
        trial: usize,
        epsilon: Probability,
        kind: Kind,
        cooperate: Probability,
        payoffs: PayoffMatrix,
        rng: SmallRng,
    ) -> Self {
        let players = std::array::from_fn(|i| {
            Player::new(format!("Player {}", i + 1), kind.build(epsilon, cooperate))
        });
        Self::new(trial, epsilon, players, payoffs, rng)
    }
    pub fn players(&self) -> &[Player; N] {
        &self.players
    }

    /// Plays `rounds` rounds, logging one record per player per round.
    pub fn simulate(&mut self, rounds: usize) -> Vec<TrialRecord> {
        log::debug!(
            "trial {} epsilon {} playing {} rounds",
            self.trial,
            self.epsilon,
            rounds
        );
        let mut records = Vec::with_capacity(rounds * N);
        for round in 1..=rounds {
            let payoffs = self.interact();
            for (player, payoff) in self.players.iter().zip(payoffs) {
                records.push(TrialRecord {
                    trial: self.trial,
                    round,
                    player: player.name().to_string(),
                    action: player.action(),
                    payoff: payoff as Utility,
                    epsilon: self.epsilon,
                });
            }
        }
        records
    }

    /// One simultaneous round. Returns each player's payoff.
    pub fn interact(&mut self) -> [i32; N] {
        let ref mut rng = self.rng;
        let [a, b] = self.players.each_mut().map(|p| p.choose(rng));
        let [x, y] = &mut self.players;
        x.commit(Outcome::new(a, b));
        y.commit(Outcome::new(b, a));
        self.payoffs.settle(a, b)
    }
}
