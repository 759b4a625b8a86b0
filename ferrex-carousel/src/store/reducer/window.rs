use std::sync::Arc;

use crate::actions::VirtualAction;
use crate::store::state::{CarouselState, VirtualState};
use crate::virtualization::next_epoch;

pub(super) fn reduce(
    state: &CarouselState,
    action: &VirtualAction,
) -> Option<CarouselState> {
    let current = &state.virtualization;
    let next = match action {
        VirtualAction::Configure {
            window_size,
            overscan,
        } => {
            if current.window_size == *window_size
                && current.overscan == *overscan
            {
                return None;
            }
            VirtualState {
                window_size: *window_size,
                overscan: *overscan,
                ..VirtualState::clone(current)
            }
        }
        VirtualAction::SetWindow {
            window,
            seam_bucket,
        } => {
            if current.window == *window && current.seam_bucket == *seam_bucket
            {
                return None;
            }
            let epoch = next_epoch(
                current.epoch,
                current.seam_bucket,
                *seam_bucket,
                state.looping,
            );
            VirtualState {
                window: *window,
                seam_bucket: *seam_bucket,
                epoch,
                ..VirtualState::clone(current)
            }
        }
        VirtualAction::Pin(index) => {
            if *index >= state.slide_count || current.pinned.contains(index) {
                return None;
            }
            let mut next = VirtualState::clone(current);
            next.pinned.insert(*index);
            next
        }
        VirtualAction::Unpin(index) => {
            if !current.pinned.contains(index) {
                return None;
            }
            let mut next = VirtualState::clone(current);
            next.pinned.remove(index);
            next
        }
        VirtualAction::ClearPins => {
            if current.pinned.is_empty() {
                return None;
            }
            VirtualState {
                pinned: Default::default(),
                ..VirtualState::clone(current)
            }
        }
    };
    Some(CarouselState {
        virtualization: Arc::new(next),
        ..state.clone()
    })
}
