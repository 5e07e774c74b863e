//! Trial records on disk.
//!
//! - `record` — One observed (player, epsilon, round, trial) row
//! - `loader` — Directory scan and CSV parsing
//! - `writer` — CSV output for simulated games

mod loader;
mod record;
mod writer;

pub use loader::*;
pub use record::*;
pub use writer::*;
