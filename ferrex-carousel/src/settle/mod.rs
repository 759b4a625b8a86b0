//! Settle detection
//!
//! A motion is armed with a token, sampled once per frame (or resolved by a
//! native end-of-scroll signal) and settles exactly once. At the settle
//! boundary [`resolve_commit`] reads mounted geometry to decide which slide
//! the track came to rest on.

mod commit;
mod machine;
mod sampler;

pub use commit::{CommitDecision, CommitInput, nearest_slide, resolve_commit};
pub use machine::{SettleConfig, SettleMachine, SettlePhase};
pub use sampler::FrameSampler;
