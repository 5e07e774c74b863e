//! Command line arguments for the `simulate` and `analyze` binaries.
use crate::analysis::Aggregate;
use crate::game::Kind;
use crate::game::PayoffMatrix;
use crate::game::Sweep;
use crate::game::linspace;
use crate::records;
use crate::render::Figure;
use crate::render::LineStyle;
use crate::render::StyleTable;
use crate::*;
use clap::Parser;
use colored::*;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Simulate epsilon-noisy iterated prisoner's dilemmas", long_about = None)]
pub struct Simulate {
    #[arg(long, default_value = DATA_DIR, help = "Directory to write one CSV per game into")]
    pub dir: PathBuf,
    #[arg(long, default_value_t = TRIALS, help = "Independent trials per epsilon")]
    pub trials: usize,
    #[arg(long, default_value_t = ROUNDS, help = "Rounds per trial")]
    pub rounds: usize,
    #[arg(long, default_value_t = EPSILON_LO, help = "Smallest epsilon")]
    pub lo: Probability,
    #[arg(long, default_value_t = EPSILON_HI, help = "Largest epsilon")]
    pub hi: Probability,
    #[arg(long, default_value_t = EPSILON_COUNT, help = "Number of evenly spaced epsilons")]
    pub count: usize,
    #[arg(long, default_value_t = 0, help = "Base seed for every game's RNG")]
    pub seed: u64,
    #[arg(long, value_enum, default_value_t = Kind::Lookup, help = "Strategy both players use")]
    pub strategy: Kind,
    #[arg(long, default_value_t = COOPERATE, help = "Cooperation probability of the random strategy")]
    pub cooperate: Probability,
}

impl From<Simulate> for Sweep {
    fn from(args: Simulate) -> Self {
        Self {
            dir: args.dir,
            trials: args.trials,
            rounds: args.rounds,
            epsilons: linspace(args.lo, args.hi, args.count),
            payoffs: PayoffMatrix::default(),
            kind: args.strategy,
            cooperate: args.cooperate,
            seed: args.seed,
        }
    }
}

impl Simulate {
    pub fn run(self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.lo) || !(0.0..=1.0).contains(&self.hi) {
            anyhow::bail!("epsilon range must lie in [0, 1]: {}..{}", self.lo, self.hi);
        }
        if !(0.0..=1.0).contains(&self.cooperate) {
            anyhow::bail!("cooperation probability must lie in [0, 1]: {}", self.cooperate);
        }
        Sweep::from(self).run().map(|_| ())
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Plot cooperation per round across epsilons", long_about = None)]
pub struct Analyze {
    #[arg(long, default_value = DATA_DIR, help = "Directory of game CSVs to merge")]
    pub dir: PathBuf,
    #[arg(long, default_value = FIGURE_PATH, help = "SVG file to render")]
    pub out: PathBuf,
    #[arg(long, help = "Also write per-round series as CSV")]
    pub summary: Option<PathBuf>,
    #[arg(long, help = "Player label to draw dashed (repeatable)")]
    pub dashed: Vec<String>,
    #[arg(long, help = "Player label to draw solid (repeatable)")]
    pub solid: Vec<String>,
}

impl Analyze {
    pub fn styles(&self) -> StyleTable {
        self.dashed
            .iter()
            .map(|p| (p.clone(), LineStyle::Dashed))
            .chain(self.solid.iter().map(|p| (p.clone(), LineStyle::Solid)))
            .collect()
    }

    pub fn run(self) -> anyhow::Result<()> {
        let records = records::load(&self.dir)?;
        if records.is_empty() {
            anyhow::bail!("no trial records found in {}", self.dir.display());
        }
        log::info!("loaded {} trial records", records.len());
        let aggregate = Aggregate::try_from(records.as_slice())?;
        println!("{}", table(&aggregate));
        if let Some(ref path) = self.summary {
            aggregate.export(path)?;
        }
        Figure::from(&aggregate).styles(self.styles()).save(&self.out)
    }
}

/// Terminal overview: first- and last-round cooperation per group.
pub fn table(aggregate: &Aggregate) -> String {
    let header = format!(
        "{:<16}{:<12}{:<10}{:<10}{:<10}{:<10}",
        "player", "epsilon", "rounds", "first C", "last C", "payoff"
    );
    std::iter::once(header.bold().to_string())
        .chain(aggregate.groups().map(|(player, epsilon, series)| {
            let first = series.cooperation().first().copied().unwrap_or_default();
            let last = series.cooperation().last().copied().unwrap_or_default();
            let payoff = series.payoff().iter().sum::<Utility>() / series.rounds().max(1) as Utility;
            let shade = format!("{:<10.3}", last);
            let shade = if last >= 0.5 { shade.green() } else { shade.red() };
            format!(
                "{:<16}{:<12}{:<10}{:<10.3}{}{:<10.3}",
                player,
                epsilon.to_string(),
                series.rounds(),
                first,
                shade,
                payoff
            )
        }))
        .collect::<Vec<_>>()
        .join("\n")
}
