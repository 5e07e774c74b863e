//! Analysis Binary
//!
//! Merges every game CSV in a directory and renders cooperation per round,
//! colored by epsilon and styled by player.

use clap::Parser;
use dilemma::*;

fn main() -> anyhow::Result<()> {
    log()?;
    cli::Analyze::parse().run()
}
