//! Virtualization window
//!
//! Decides which positions stay mounted. Positions are integers on the
//! (possibly unbounded under loop) position line; the logical index shown at
//! a position is recovered with floor-modulo under loop.
//!
//! Render identity is keyed by `(epoch, position)`. The epoch only moves
//! when a looping window crosses into a different seam bucket, so the same
//! logical slide reappearing on the other side of the seam gets a fresh key.

mod seam;
mod slots;
mod window;

pub use seam::{next_epoch, seam_bucket};
pub use slots::{RenderSlot, SlotKey, render_slots};
pub use window::{WindowInput, compute_window};

/// Inclusive bounds of mounted positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualWindow {
    pub start: i64,
    pub end: i64,
    pub size: usize,
}

impl VirtualWindow {
    pub fn new(start: i64, end: i64) -> Self {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        Self {
            start,
            end,
            size: (end - start + 1) as usize,
        }
    }

    pub fn contains(&self, position: i64) -> bool {
        (self.start..=self.end).contains(&position)
    }

    pub fn positions(&self) -> std::ops::RangeInclusive<i64> {
        self.start..=self.end
    }

    /// Intersect with `[0, count)`. `None` when nothing remains.
    pub fn clamped(&self, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let start = self.start.max(0);
        let end = self.end.min(count as i64 - 1);
        (start <= end).then(|| Self::new(start, end))
    }
}
