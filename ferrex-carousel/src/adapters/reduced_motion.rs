use crate::actions::Action;
use crate::types::Gate;

/// Mirrors the platform's reduced-motion preference into its gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReducedMotionAdapter;

impl ReducedMotionAdapter {
    pub fn on_preference(&self, prefers_reduced_motion: bool) -> Action {
        Action::set_gate(Gate::ReducedMotion, prefers_reduced_motion)
    }
}
