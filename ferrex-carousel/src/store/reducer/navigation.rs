use std::sync::Arc;

use crate::actions::NavigationAction;
use crate::math::clamp_index;
use crate::store::state::{CarouselState, MotionState, VirtualState};
use crate::types::{CommitSource, LogicalIndex};

pub(super) fn reduce(
    state: &CarouselState,
    action: &NavigationAction,
) -> Option<CarouselState> {
    match action {
        NavigationAction::Request(kind) => {
            log::trace!("navigation requested: {kind:?}");
            None
        }
        NavigationAction::Commit { index, source } => {
            commit(state, *index, *source)
        }
        NavigationAction::SetSlideCount(count) => {
            set_slide_count(state, *count)
        }
    }
}

fn commit(
    state: &CarouselState,
    index: LogicalIndex,
    source: CommitSource,
) -> Option<CarouselState> {
    let index = clamp_index(index as i64, state.slide_count);
    match source {
        CommitSource::Settle { token } => {
            if state.motion.pending_token != Some(token) {
                log::warn!(
                    "rejecting stale commit of index {index} (token {token}, pending {:?})",
                    state.motion.pending_token
                );
                return None;
            }
            log::debug!("committed index {index} from settle token {token}");
            Some(CarouselState {
                index,
                motion: MotionState {
                    pending_token: None,
                    is_animating: false,
                    ..state.motion
                },
                ..state.clone()
            })
        }
        CommitSource::External => {
            if index == state.index {
                return None;
            }
            log::debug!("committed index {index} from external source");
            Some(CarouselState {
                index,
                ..state.clone()
            })
        }
    }
}

fn set_slide_count(state: &CarouselState, count: usize) -> Option<CarouselState> {
    if count == state.slide_count {
        return None;
    }
    let current = &state.virtualization;
    let mut virtualization = VirtualState {
        pinned: current
            .pinned
            .iter()
            .copied()
            .filter(|&i| i < count)
            .collect(),
        ..VirtualState::clone(current)
    };
    if !state.looping {
        virtualization.window =
            current.window.and_then(|w| w.clamped(count));
    }
    Some(CarouselState {
        slide_count: count,
        index: clamp_index(state.index as i64, count),
        virtualization: Arc::new(virtualization),
        ..state.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::options::CarouselOptions;
    use crate::store::reduce;
    use crate::virtualization::VirtualWindow;

    fn state(count: usize, index: usize) -> Arc<CarouselState> {
        let options = CarouselOptions::with_slides(count).initial_index(index);
        Arc::new(CarouselState::new(&options))
    }

    #[test]
    fn requests_never_move_the_index() {
        let s = state(5, 2);
        for action in [
            Action::request_next(),
            Action::request_prev(),
            Action::request_goto(4).unwrap(),
        ] {
            let next = reduce(&s, &action);
            assert!(Arc::ptr_eq(&s, &next));
        }
    }

    #[test]
    fn settle_commit_requires_the_pending_token() {
        let s = state(5, 0);
        let s = reduce(&s, &Action::start_motion(1, true));
        let s = reduce(&s, &Action::start_motion(2, true));

        let stale = Action::commit_index(3, CommitSource::Settle { token: 1 })
            .unwrap();
        let after_stale = reduce(&s, &stale);
        assert!(Arc::ptr_eq(&s, &after_stale));

        let fresh = Action::commit_index(3, CommitSource::Settle { token: 2 })
            .unwrap();
        let s = reduce(&s, &fresh);
        assert_eq!(s.index, 3);
        assert_eq!(s.motion.pending_token, None);
        assert!(!s.motion.is_animating);

        // Second commit of the same token is stale now.
        let again = reduce(&s, &fresh);
        assert!(Arc::ptr_eq(&s, &again));
    }

    #[test]
    fn external_commit_is_clamped() {
        let s = state(3, 0);
        let s = reduce(
            &s,
            &Action::commit_index(9, CommitSource::External).unwrap(),
        );
        assert_eq!(s.index, 2);
    }

    #[test]
    fn shrinking_slide_count_clamps_and_prunes() {
        let s = state(6, 5);
        let s = reduce(&s, &Action::pin(4).unwrap());
        let s = reduce(&s, &Action::pin(1).unwrap());
        let s = reduce(
            &s,
            &Action::set_window(Some(VirtualWindow::new(2, 5)), Some(0)),
        );
        let s = reduce(&s, &Action::set_slide_count(3).unwrap());
        assert_eq!(s.index, 2);
        assert_eq!(s.virtualization.pinned.iter().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(s.virtualization.window, Some(VirtualWindow::new(2, 2)));

        let empty = reduce(&s, &Action::set_slide_count(0).unwrap());
        assert_eq!(empty.index, 0);
        assert_eq!(empty.virtualization.window, None);
    }
}
