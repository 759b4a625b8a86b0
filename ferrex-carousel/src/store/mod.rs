//! Single-writer state store
//!
//! [`Store`] owns the current [`CarouselState`] snapshot and replaces it on
//! every dispatch. Readers hold `Arc` snapshots; nobody keeps a mutable
//! reference between dispatches.

mod reducer;
mod state;

use std::collections::VecDeque;
use std::sync::Arc;

pub use reducer::reduce;
pub use state::{
    A11yState, AutoplayState, CarouselState, GateSet, MeasureState,
    MotionState, VirtualState,
};

use crate::actions::Action;

/// One dispatched action and whether it changed state.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub action: Action,
    pub changed: bool,
}

#[derive(Debug)]
pub struct Store {
    state: Arc<CarouselState>,
    journal: Option<Journal>,
}

#[derive(Debug)]
struct Journal {
    entries: VecDeque<JournalEntry>,
    capacity: usize,
}

impl Store {
    pub fn new(state: CarouselState) -> Self {
        Self {
            state: Arc::new(state),
            journal: None,
        }
    }

    /// Keep the last `capacity` dispatched actions.
    pub fn with_journal(mut self, capacity: usize) -> Self {
        self.journal = Some(Journal {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        });
        self
    }

    /// Reduce `action` into the store. Returns whether state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        log::trace!("dispatch {}", action.tag());
        let next = reduce(&self.state, &action);
        let changed = !Arc::ptr_eq(&next, &self.state);
        self.state = next;
        if let Some(journal) = self.journal.as_mut()
            && journal.capacity > 0
        {
            if journal.entries.len() == journal.capacity {
                journal.entries.pop_front();
            }
            journal.entries.push_back(JournalEntry { action, changed });
        }
        changed
    }

    /// Dispatch several actions. Returns whether any changed state.
    pub fn dispatch_all<I>(&mut self, actions: I) -> bool
    where
        I: IntoIterator<Item = Action>,
    {
        actions
            .into_iter()
            .fold(false, |changed, action| self.dispatch(action) || changed)
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn snapshot(&self) -> Arc<CarouselState> {
        Arc::clone(&self.state)
    }

    /// Oldest first. Empty when the journal is disabled.
    pub fn journal(&self) -> impl Iterator<Item = &JournalEntry> {
        self.journal
            .iter()
            .flat_map(|journal| journal.entries.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CarouselOptions;
    use crate::types::Gate;

    #[test]
    fn dispatch_reports_change() {
        let mut store =
            Store::new(CarouselState::new(&CarouselOptions::with_slides(3)));
        assert!(store.dispatch(Action::set_gate(Gate::Hover, true)));
        assert!(!store.dispatch(Action::set_gate(Gate::Hover, true)));
        assert!(!store.dispatch(Action::request_next()));
    }

    #[test]
    fn snapshots_survive_later_dispatches() {
        let mut store =
            Store::new(CarouselState::new(&CarouselOptions::with_slides(3)));
        let before = store.snapshot();
        store.dispatch(Action::set_gate(Gate::FocusWithin, true));
        assert!(!before.gates.focus_within);
        assert!(store.state().gates.focus_within);
    }

    #[test]
    fn journal_is_bounded() {
        let mut store =
            Store::new(CarouselState::new(&CarouselOptions::with_slides(3)))
                .with_journal(2);
        store.dispatch(Action::request_next());
        store.dispatch(Action::set_gate(Gate::Hover, true));
        store.dispatch(Action::set_gate(Gate::Hover, true));
        let entries: Vec<_> = store.journal().collect();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].changed);
        assert!(!entries[1].changed);
        assert_eq!(entries[0].action.tag(), "gate/set");
    }

    #[test]
    fn dispatch_all_folds_changes() {
        let mut store =
            Store::new(CarouselState::new(&CarouselOptions::with_slides(3)));
        assert!(store.dispatch_all([
            Action::request_next(),
            Action::set_gate(Gate::Hover, true),
        ]));
        assert!(!store.dispatch_all([Action::request_prev()]));
    }
}
