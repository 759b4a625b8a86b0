//! Top-level reducer
//!
//! Routes each action to the reducer of its category. A category reducer
//! returns `None` when the action has no effect, in which case the input
//! `Arc` is handed back untouched so callers can detect change with
//! `Arc::ptr_eq`.

mod a11y;
mod gates;
mod measure;
mod motion;
mod navigation;
mod window;

use std::sync::Arc;

use super::state::CarouselState;
use crate::actions::Action;

pub fn reduce(state: &Arc<CarouselState>, action: &Action) -> Arc<CarouselState> {
    let next = match action {
        Action::Measure(a) => measure::reduce(state, a),
        Action::Navigation(a) => navigation::reduce(state, a),
        Action::Motion(a) => motion::reduce(state, a),
        Action::Virtual(a) => window::reduce(state, a),
        Action::Gate(a) => gates::reduce(state, a),
        Action::A11y(a) => a11y::reduce(state, a),
        Action::Unrecognized(tag) => {
            log::trace!("ignoring unrecognized action {tag}");
            None
        }
    };
    match next {
        Some(next) => Arc::new(next),
        None => {
            log::trace!("{} had no effect", action.tag());
            Arc::clone(state)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CarouselOptions;
    use crate::types::Gate;

    fn state(count: usize) -> Arc<CarouselState> {
        Arc::new(CarouselState::new(&CarouselOptions::with_slides(count)))
    }

    #[test]
    fn unrecognized_actions_return_the_same_state() {
        let s = state(3);
        let next = reduce(&s, &Action::Unrecognized("x/y".into()));
        assert!(Arc::ptr_eq(&s, &next));
    }

    #[test]
    fn redundant_actions_return_the_same_state() {
        let s = state(3);
        let s = reduce(&s, &Action::set_gate(Gate::Hover, true));
        let again = reduce(&s, &Action::set_gate(Gate::Hover, true));
        assert!(Arc::ptr_eq(&s, &again));
    }

    #[test]
    fn untouched_substates_are_shared() {
        let s = state(3);
        let next = reduce(&s, &Action::set_gate(Gate::Hover, true));
        assert!(!Arc::ptr_eq(&s, &next));
        assert!(Arc::ptr_eq(&s.measure, &next.measure));
        assert!(Arc::ptr_eq(&s.virtualization, &next.virtualization));
        assert!(Arc::ptr_eq(&s.a11y, &next.a11y));
    }
}
