//! Cooperation figure.
//!
//! - `ramp` — Fixed color ramp and discrete sampling
//! - `palette` — Epsilon → color assignment
//! - `style` — Player → line style assignment
//! - `figure` — SVG line plot of cooperation fraction per round

mod figure;
mod palette;
mod ramp;
mod style;

pub use figure::*;
pub use palette::*;
pub use ramp::*;
pub use style::*;
