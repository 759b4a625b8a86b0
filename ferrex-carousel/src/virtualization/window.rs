use std::collections::BTreeSet;

use super::VirtualWindow;
use crate::math::nearest_position;
use crate::types::LogicalIndex;

/// Everything the window computation reads.
#[derive(Debug, Clone, Copy)]
pub struct WindowInput<'a> {
    pub count: usize,
    pub looping: bool,
    /// Position the window is centered on.
    pub center: i64,
    pub window_size: usize,
    pub overscan: usize,
    /// Logical indices that must stay mounted.
    pub pinned: &'a BTreeSet<LogicalIndex>,
    /// Extra positions that must stay mounted, e.g. an in-flight target.
    pub anchors: &'a [i64],
}

/// Inclusive window of positions to mount. `None` without slides.
///
/// Starts from a symmetric span of `window_size + 2 * overscan` (rounded up
/// to odd) around `center`, grows to cover every pin and anchor, then
/// without loop is shifted into `[0, count)` and capped at the full range.
pub fn compute_window(input: &WindowInput<'_>) -> Option<VirtualWindow> {
    let count = input.count;
    if count == 0 {
        return None;
    }
    let n = count as i64;

    let mut span = input.window_size.max(1) + 2 * input.overscan;
    if span % 2 == 0 {
        span += 1;
    }
    let half = (span / 2) as i64;

    let center = if input.looping {
        input.center
    } else {
        input.center.clamp(0, n - 1)
    };
    let mut start = center - half;
    let mut end = center + half;

    for &pin in input.pinned {
        if pin >= count {
            continue;
        }
        let position = if input.looping {
            nearest_position(pin, count, center)
        } else {
            pin as i64
        };
        start = start.min(position);
        end = end.max(position);
    }

    for &anchor in input.anchors {
        let position = if input.looping {
            anchor
        } else {
            anchor.clamp(0, n - 1)
        };
        start = start.min(position);
        end = end.max(position);
    }

    if !input.looping {
        if start < 0 {
            end -= start;
            start = 0;
        }
        if end > n - 1 {
            start -= end - (n - 1);
            end = n - 1;
        }
        start = start.max(0);
    }

    Some(VirtualWindow::new(start, end))
}
