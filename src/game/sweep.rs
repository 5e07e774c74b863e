use super::*;
use crate::records;
use crate::*;
use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::PathBuf;

/// Every (trial, epsilon) combination of a simulation run.
///
/// Each game gets its own RNG derived from `seed`, the trial index and the
/// epsilon index, so results do not depend on scheduling.
#[derive(Debug, Clone)]
pub struct Sweep {
    pub dir: PathBuf,
    pub trials: usize,
    pub rounds: usize,
    pub epsilons: Vec<Probability>,
    pub payoffs: PayoffMatrix,
    pub kind: Kind,
    pub cooperate: Probability,
    pub seed: u64,
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DATA_DIR),
            trials: TRIALS,
            rounds: ROUNDS,
            epsilons: linspace(EPSILON_LO, EPSILON_HI, EPSILON_COUNT),
            payoffs: PayoffMatrix::default(),
            kind: Kind::default(),
            cooperate: COOPERATE,
            seed: 0,
        }
    }
}

impl Sweep {
    /// Number of games in the sweep.
    pub fn size(&self) -> usize {
        self.trials * self.epsilons.len()
    }

    /// Plays one game.
    pub fn game(&self, trial: usize, index: usize) -> Game {
        let epsilon = self.epsilons[index];
        let seed = self
            .seed
            .wrapping_mul(0x9E3779B97F4A7C15)
            .wrapping_add((trial * self.epsilons.len() + index) as u64);
        Game::pair(
            trial,
            epsilon,
            self.kind,
            self.cooperate,
            self.payoffs,
            SmallRng::seed_from_u64(seed),
        )
    }

    /// File that holds the log of one game.
    pub fn path(&self, trial: usize, epsilon: Probability) -> PathBuf {
        self.dir
            .join(format!("game_log_trial_{}_{:0.5}.csv", trial, epsilon))
    }

    /// Plays one game and writes its log.
    fn play(&self, trial: usize, index: usize) -> anyhow::Result<PathBuf> {
        let mut game = self.game(trial, index);
        let rows = game.simulate(self.rounds);
        for player in game.players() {
            log::debug!("{}", player);
        }
        let path = self.path(trial, self.epsilons[index]);
        records::write(&path, &rows)?;
        Ok(path)
    }

    /// Plays every game, writing one CSV per (trial, epsilon).
    pub fn run(&self) -> anyhow::Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create {}", self.dir.display()))?;
        log::info!(
            "simulating {} games ({} trials × {} epsilons, {} rounds) into {}",
            self.size(),
            self.trials,
            self.epsilons.len(),
            self.rounds,
            self.dir.display()
        );
        let jobs = (0..self.trials)
            .flat_map(|t| (0..self.epsilons.len()).map(move |e| (t, e)))
            .collect::<Vec<_>>();
        #[cfg(feature = "cli")]
        let paths = {
            use rayon::prelude::*;
            jobs.into_par_iter()
                .map(|(t, e)| self.play(t, e))
                .collect::<anyhow::Result<Vec<_>>>()?
        };
        #[cfg(not(feature = "cli"))]
        let paths = jobs
            .into_iter()
            .map(|(t, e)| self.play(t, e))
            .collect::<anyhow::Result<Vec<_>>>()?;
        log::info!("wrote {} game logs", paths.len());
        Ok(paths)
    }
}

/// `count` evenly spaced values from `lo` to `hi` inclusive.
pub fn linspace(lo: Probability, hi: Probability, count: usize) -> Vec<Probability> {
    match count {
        0 => Vec::new(),
        1 => vec![lo],
        n => (0..n)
            .map(|i| lo + (hi - lo) * i as Probability / (n - 1) as Probability)
            .collect(),
    }
}
