use crate::actions::Action;
use crate::types::Gate;

/// Page visibility. Inert when the carousel keeps playing while hidden.
#[derive(Debug, Clone)]
pub struct VisibilityAdapter {
    enabled: bool,
}

impl VisibilityAdapter {
    pub fn new(pause_when_hidden: bool) -> Self {
        Self {
            enabled: pause_when_hidden,
        }
    }

    pub fn on_visibility(&self, hidden: bool) -> Option<Action> {
        self.enabled
            .then(|| Action::set_gate(Gate::VisibilityHidden, hidden))
    }
}
