use crate::actions::{Action, VirtualAction};
use crate::types::{Gate, LogicalIndex};

/// Where focus landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Inside the slide with this logical index.
    Slide(LogicalIndex),
    /// Inside the carousel root but not in a slide (e.g. a control).
    Root,
    /// Outside the carousel.
    Outside,
}

/// Keeps the focused slide pinned and the focus-within gate current.
#[derive(Debug, Clone, Default)]
pub struct FocusAdapter {
    within: bool,
    slide: Option<LogicalIndex>,
}

impl FocusAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_slide(&self) -> Option<LogicalIndex> {
        self.slide
    }

    pub fn on_focus(&mut self, target: FocusTarget) -> Vec<Action> {
        let mut actions = Vec::new();
        let within = !matches!(target, FocusTarget::Outside);
        let slide = match target {
            FocusTarget::Slide(index) => Some(index),
            _ => None,
        };

        if let Some(previous) = self.slide
            && slide != Some(previous)
        {
            actions.push(VirtualAction::Unpin(previous).into());
        }
        if let Some(index) = slide
            && self.slide != Some(index)
        {
            actions.push(VirtualAction::Pin(index).into());
        }
        if within != self.within {
            actions.push(Action::set_gate(Gate::FocusWithin, within));
        }

        self.within = within;
        self.slide = slide;
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focusing_a_slide_pins_it() {
        let mut focus = FocusAdapter::new();
        assert_eq!(
            focus.on_focus(FocusTarget::Slide(2)),
            vec![
                Action::Virtual(VirtualAction::Pin(2)),
                Action::set_gate(Gate::FocusWithin, true),
            ]
        );
        assert!(focus.on_focus(FocusTarget::Slide(2)).is_empty());
    }

    #[test]
    fn moving_between_slides_swaps_the_pin() {
        let mut focus = FocusAdapter::new();
        focus.on_focus(FocusTarget::Slide(2));
        assert_eq!(
            focus.on_focus(FocusTarget::Slide(4)),
            vec![
                Action::Virtual(VirtualAction::Unpin(2)),
                Action::Virtual(VirtualAction::Pin(4)),
            ]
        );
    }

    #[test]
    fn leaving_to_a_control_keeps_focus_within() {
        let mut focus = FocusAdapter::new();
        focus.on_focus(FocusTarget::Slide(1));
        assert_eq!(
            focus.on_focus(FocusTarget::Root),
            vec![Action::Virtual(VirtualAction::Unpin(1))]
        );
    }

    #[test]
    fn leaving_the_root_clears_everything() {
        let mut focus = FocusAdapter::new();
        focus.on_focus(FocusTarget::Slide(1));
        assert_eq!(
            focus.on_focus(FocusTarget::Outside),
            vec![
                Action::Virtual(VirtualAction::Unpin(1)),
                Action::set_gate(Gate::FocusWithin, false),
            ]
        );
        assert_eq!(focus.focused_slide(), None);
    }
}
