use crate::actions::GateAction;
use crate::store::state::{AutoplayState, CarouselState};
use crate::types::Gate;

pub(super) fn reduce(
    state: &CarouselState,
    action: &GateAction,
) -> Option<CarouselState> {
    match *action {
        GateAction::Set { gate, value } => {
            if state.gates.get(gate) == value {
                return None;
            }
            log::trace!("gate {gate:?} -> {value}");
            Some(CarouselState {
                gates: state.gates.with(gate, value),
                // The gesture flag mirrors the dragging gate.
                is_dragging: if gate == Gate::Dragging {
                    value
                } else {
                    state.is_dragging
                },
                ..state.clone()
            })
        }
        GateAction::SetAutoplayEnabled(enabled) => {
            if state.autoplay.enabled == enabled {
                return None;
            }
            Some(CarouselState {
                autoplay: AutoplayState {
                    enabled,
                    ..state.autoplay
                },
                ..state.clone()
            })
        }
        GateAction::SetInterval(interval_ms) => {
            if state.autoplay.interval_ms == interval_ms {
                return None;
            }
            Some(CarouselState {
                autoplay: AutoplayState {
                    interval_ms,
                    ..state.autoplay
                },
                ..state.clone()
            })
        }
    }
}
