//! Aggregation of trial records.
//!
//! Records are grouped into an explicit player → epsilon → [`Series`]
//! mapping. Each group is laid out as a dense rounds × trials [`Grid`]
//! before reducing rows to per-round statistics.

mod aggregate;
mod epsilon;
mod grid;
mod series;
mod summary;

pub use aggregate::*;
pub use epsilon::*;
pub use grid::*;
pub use series::*;
pub use summary::*;
