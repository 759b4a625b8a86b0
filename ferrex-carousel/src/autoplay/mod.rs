//! Autoplay gates, accessibility policy and ticking
//!
//! Whether autoplay may run is a pure function of the enabled flag, the
//! interval, the slide count and the gate set. Step and continuous modes go
//! through the same evaluator.

mod controller;
mod gates;
mod policy;
mod ticker;

pub use controller::{AutoplayController, PlaybackControls};
pub use gates::{AutoplayInput, BlockReason, GateEvaluation, evaluate};
pub use policy::{AutoplayPolicy, policy};
pub use ticker::IntervalTicker;
