//! Simulation Binary
//!
//! Plays trials × epsilons iterated prisoner's dilemmas and writes one CSV
//! log per game.

use clap::Parser;
use dilemma::*;

fn main() -> anyhow::Result<()> {
    log()?;
    cli::Simulate::parse().run()
}
