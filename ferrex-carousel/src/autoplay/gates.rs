use crate::store::{CarouselState, GateSet};
use crate::types::Gate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayInput {
    pub enabled: bool,
    pub interval_ms: u64,
    pub slide_count: usize,
    pub gates: GateSet,
}

impl From<&CarouselState> for AutoplayInput {
    fn from(state: &CarouselState) -> Self {
        Self {
            enabled: state.autoplay.enabled,
            interval_ms: state.autoplay.interval_ms,
            slide_count: state.slide_count,
            gates: state.gates,
        }
    }
}

/// Why autoplay cannot run. Reasons are independent and cumulative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockReason {
    Disabled,
    TooFewSlides,
    InvalidInterval,
    Gate(Gate),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GateEvaluation {
    pub can_run: bool,
    /// Every blocking reason, in a fixed order.
    pub blocked: Vec<BlockReason>,
}

pub fn evaluate(input: &AutoplayInput) -> GateEvaluation {
    let mut blocked = Vec::new();
    if !input.enabled {
        blocked.push(BlockReason::Disabled);
    }
    if input.slide_count <= 1 {
        blocked.push(BlockReason::TooFewSlides);
    }
    if input.interval_ms == 0 {
        blocked.push(BlockReason::InvalidInterval);
    }
    blocked.extend(input.gates.active().map(BlockReason::Gate));
    GateEvaluation {
        can_run: blocked.is_empty(),
        blocked,
    }
}
