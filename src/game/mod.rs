//! Two-player iterated prisoner's dilemma.
//!
//! - `action` — Cooperate / Defect
//! - `outcome` — Joint (mine, theirs) action pair remembered per round
//! - `payoff` — 2×2 payoff matrix
//! - `strategy` — Action selection rules and the epsilon mistake wrapper
//! - `player` — Named player with strategy and history
//! - `game` — Round loop producing trial records
//! - `sweep` — Trials × epsilons, one CSV per game

mod action;
mod game;
mod outcome;
mod payoff;
mod player;
mod strategy;
mod sweep;

pub use action::*;
pub use game::*;
pub use outcome::*;
pub use payoff::*;
pub use player::*;
pub use strategy::*;
pub use sweep::*;
