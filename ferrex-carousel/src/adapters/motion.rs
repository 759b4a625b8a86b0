use std::cell::Cell;
use std::rc::Rc;

/// Shared slot for the latest raw scroll offset.
///
/// The high-frequency scroll callback only writes here; the frame driver
/// reads it. Cloning shares the same slot.
#[derive(Debug, Clone, Default)]
pub struct ScrollSink {
    latest: Rc<Cell<Option<f32>>>,
}

impl ScrollSink {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn write(&self, px: f32) {
        self.latest.set(Some(px));
    }

    #[inline]
    pub fn peek(&self) -> Option<f32> {
        self.latest.get()
    }

    pub fn clear(&self) {
        self.latest.set(None);
    }
}
