use crate::actions::MotionAction;
use crate::store::state::{CarouselState, MotionState};

pub(super) fn reduce(
    state: &CarouselState,
    action: &MotionAction,
) -> Option<CarouselState> {
    match *action {
        MotionAction::Start { token, animated } => {
            if token <= state.motion.token {
                log::warn!(
                    "ignoring motion token {token}, last issued {}",
                    state.motion.token
                );
                return None;
            }
            Some(CarouselState {
                motion: MotionState {
                    token,
                    pending_token: Some(token),
                    is_animating: animated,
                },
                ..state.clone()
            })
        }
        MotionAction::ObserveScroll(px) => {
            if px == state.scroll_px {
                return None;
            }
            Some(CarouselState {
                scroll_px: px,
                ..state.clone()
            })
        }
        MotionAction::Cancel => {
            if state.motion.pending_token.is_none()
                && !state.motion.is_animating
            {
                return None;
            }
            Some(CarouselState {
                motion: MotionState {
                    pending_token: None,
                    is_animating: false,
                    ..state.motion
                },
                ..state.clone()
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::actions::Action;
    use crate::options::CarouselOptions;
    use crate::store::reduce;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn tokens_must_strictly_increase() {
        let s = Arc::new(CarouselState::new(&CarouselOptions::with_slides(4)));
        let s = reduce(&s, &Action::start_motion(3, false));
        assert_eq!(s.motion.pending_token, Some(3));
        for token in [0, 2, 3] {
            let next = reduce(&s, &Action::start_motion(token, true));
            assert!(Arc::ptr_eq(&s, &next));
        }
    }

    #[test]
    fn pending_token_increases_across_random_sequences() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut s =
            Arc::new(CarouselState::new(&CarouselOptions::with_slides(4)));
        let mut last = 0;
        for _ in 0..500 {
            let token = rng.random_range(0..1_000u64);
            s = reduce(&s, &Action::start_motion(token, true));
            if let Some(pending) = s.motion.pending_token {
                assert!(pending >= last);
                last = pending;
            }
            assert_eq!(s.motion.token, last);
        }
    }

    #[test]
    fn cancel_clears_pending_motion() {
        let s = Arc::new(CarouselState::new(&CarouselOptions::with_slides(4)));
        let idle = reduce(&s, &Action::cancel_motion());
        assert!(Arc::ptr_eq(&s, &idle));

        let s = reduce(&s, &Action::start_motion(1, true));
        let s = reduce(&s, &Action::cancel_motion());
        assert_eq!(s.motion.pending_token, None);
        assert_eq!(s.motion.token, 1);
    }

    #[test]
    fn same_scroll_offset_is_a_no_op() {
        let s = Arc::new(CarouselState::new(&CarouselOptions::with_slides(4)));
        let s = reduce(&s, &Action::observe_scroll(12.5).unwrap());
        let again = reduce(&s, &Action::observe_scroll(12.5).unwrap());
        assert!(Arc::ptr_eq(&s, &again));
    }
}
