use std::sync::Arc;

use crate::actions::A11yAction;
use crate::store::state::{A11yState, CarouselState};

pub(super) fn reduce(
    state: &CarouselState,
    action: &A11yAction,
) -> Option<CarouselState> {
    let current = &state.a11y;
    let next = match action {
        A11yAction::SetLiveMode(mode) if current.live_mode != *mode => {
            A11yState {
                live_mode: *mode,
                ..A11yState::clone(current)
            }
        }
        A11yAction::SetAnnounceEnabled(enabled)
            if current.announce_enabled != *enabled =>
        {
            A11yState {
                announce_enabled: *enabled,
                ..A11yState::clone(current)
            }
        }
        A11yAction::Announce(message)
            if current.last_announcement != *message =>
        {
            A11yState {
                last_announcement: message.clone(),
                ..A11yState::clone(current)
            }
        }
        _ => return None,
    };
    Some(CarouselState {
        a11y: Arc::new(next),
        ..state.clone()
    })
}
