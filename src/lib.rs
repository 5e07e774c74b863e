//! Epsilon-noisy iterated prisoner's dilemma: simulation and analysis.
//!
//! ## Module Organization
//!
//! - [`game`] — Actions, payoffs, strategies, and the two-player game loop
//! - [`records`] — Trial records on disk (CSV loading and writing)
//! - [`analysis`] — Grouping by (player, epsilon) and per-round reduction
//! - [`render`] — Palette, line styles, and the cooperation figure
//! - [`cli`] — Command line arguments for the `simulate` and `analyze` binaries
pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod game;
pub mod records;
pub mod render;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoffs received in a single round, and their averages.
pub type Utility = f64;
/// Exploration rates, mistake rates, and cooperation fractions.
pub type Probability = f64;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of players in an iterated dilemma.
pub const N: usize = 2;
/// Rounds played per trial.
pub const ROUNDS: usize = 50;
/// Independent trials per epsilon value.
pub const TRIALS: usize = 1000;
/// Payoff matrix indexed `[mine][theirs]` with C = 0, D = 1.
/// Reward 3, sucker 0, temptation 5, punishment 1.
pub const PAYOFFS: [[i32; 2]; 2] = [[3, 0], [5, 1]];
/// Cooperation probability of the `random` strategy before mistakes.
pub const COOPERATE: Probability = 0.5;

// ============================================================================
// EPSILON SWEEP
// Exploration rates are spaced evenly over [EPSILON_LO, EPSILON_HI].
// ============================================================================
/// Smallest exploration rate in the sweep.
pub const EPSILON_LO: Probability = 0.0;
/// Largest exploration rate in the sweep.
pub const EPSILON_HI: Probability = 0.1;
/// Number of exploration rates in the sweep.
pub const EPSILON_COUNT: usize = 5;

// ============================================================================
// FILESYSTEM
// ============================================================================
/// Directory holding one CSV per (trial, epsilon) game.
pub const DATA_DIR: &str = "data";
/// Default location of the rendered cooperation figure.
pub const FIGURE_PATH: &str = "coop.svg";

// ============================================================================
// FIGURE
// ============================================================================
/// Figure size in pixels.
pub const FIGURE_SIZE: (u32, u32) = (1200, 700);
/// Fixed y range, just outside [0, 1].
pub const FIGURE_Y_RANGE: (f64, f64) = (-0.05, 1.05);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Installs the process logger for the `simulate` and `analyze` binaries.
/// Sweep progress and load counts reach the terminal at INFO; per-game
/// detail goes to `logs/{unix_secs}.log` at DEBUG.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
