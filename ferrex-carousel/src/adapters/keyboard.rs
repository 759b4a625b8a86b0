use crate::types::{Axis, NavigationKind, ReadingDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Other,
}

/// Maps keys to navigation intents for one axis and reading direction.
#[derive(Debug, Clone, Copy)]
pub struct KeyboardAdapter {
    axis: Axis,
    direction: ReadingDirection,
}

impl KeyboardAdapter {
    pub fn new(axis: Axis, direction: ReadingDirection) -> Self {
        Self { axis, direction }
    }

    /// `None` for unmapped keys, keys typed into editable controls and
    /// empty carousels.
    pub fn on_key(
        &self,
        key: Key,
        target_is_editable: bool,
        slide_count: usize,
    ) -> Option<NavigationKind> {
        if target_is_editable || slide_count == 0 {
            return None;
        }
        let rtl = self.direction == ReadingDirection::Rtl;
        match (self.axis, key) {
            (Axis::Horizontal, Key::ArrowLeft) => {
                Some(if rtl { NavigationKind::Next } else { NavigationKind::Prev })
            }
            (Axis::Horizontal, Key::ArrowRight) => {
                Some(if rtl { NavigationKind::Prev } else { NavigationKind::Next })
            }
            (Axis::Vertical, Key::ArrowUp) => Some(NavigationKind::Prev),
            (Axis::Vertical, Key::ArrowDown) => Some(NavigationKind::Next),
            (_, Key::Home) => Some(NavigationKind::GoTo(0)),
            (_, Key::End) => Some(NavigationKind::GoTo(slide_count - 1)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_ltr_arrows() {
        let kb = KeyboardAdapter::new(Axis::Horizontal, ReadingDirection::Ltr);
        assert_eq!(kb.on_key(Key::ArrowLeft, false, 3), Some(NavigationKind::Prev));
        assert_eq!(kb.on_key(Key::ArrowRight, false, 3), Some(NavigationKind::Next));
        assert_eq!(kb.on_key(Key::ArrowDown, false, 3), None);
    }

    #[test]
    fn horizontal_rtl_swaps_arrows() {
        let kb = KeyboardAdapter::new(Axis::Horizontal, ReadingDirection::Rtl);
        assert_eq!(kb.on_key(Key::ArrowLeft, false, 3), Some(NavigationKind::Next));
        assert_eq!(kb.on_key(Key::ArrowRight, false, 3), Some(NavigationKind::Prev));
    }

    #[test]
    fn vertical_ignores_direction() {
        for dir in [ReadingDirection::Ltr, ReadingDirection::Rtl] {
            let kb = KeyboardAdapter::new(Axis::Vertical, dir);
            assert_eq!(kb.on_key(Key::ArrowUp, false, 3), Some(NavigationKind::Prev));
            assert_eq!(kb.on_key(Key::ArrowDown, false, 3), Some(NavigationKind::Next));
            assert_eq!(kb.on_key(Key::ArrowLeft, false, 3), None);
        }
    }

    #[test]
    fn home_and_end_jump() {
        let kb = KeyboardAdapter::new(Axis::Horizontal, ReadingDirection::Ltr);
        assert_eq!(kb.on_key(Key::Home, false, 5), Some(NavigationKind::GoTo(0)));
        assert_eq!(kb.on_key(Key::End, false, 5), Some(NavigationKind::GoTo(4)));
        assert_eq!(kb.on_key(Key::End, false, 0), None);
    }

    #[test]
    fn editable_targets_are_never_intercepted() {
        let kb = KeyboardAdapter::new(Axis::Horizontal, ReadingDirection::Ltr);
        assert_eq!(kb.on_key(Key::ArrowRight, true, 3), None);
        assert_eq!(kb.on_key(Key::Home, true, 3), None);
    }
}
