use crate::actions::Action;
use crate::types::Gate;

/// Pointer enter/leave on the carousel root.
#[derive(Debug, Clone, Default)]
pub struct HoverAdapter {
    hovered: bool,
}

impl HoverAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` when the hover state did not change.
    pub fn on_hover(&mut self, hovered: bool) -> Option<Action> {
        if self.hovered == hovered {
            return None;
        }
        self.hovered = hovered;
        Some(Action::set_gate(Gate::Hover, hovered))
    }
}
