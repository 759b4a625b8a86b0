//! Index and position arithmetic
//!
//! Positions live on an unbounded integer line ("position space"). Under
//! loop mode a position maps onto a logical index with floor-modulo; without
//! loop, positions and logical indices coincide and are clamped.

use crate::types::LogicalIndex;

/// Floor division for a positive divisor, correct for negative dividends.
#[inline]
pub fn floor_div(a: i64, b: i64) -> i64 {
    debug_assert!(b > 0, "floor_div requires a positive divisor");
    let q = a / b;
    if a % b != 0 && a < 0 { q - 1 } else { q }
}

/// Floor modulo for a positive divisor. Result is always in `[0, b)`.
#[inline]
pub fn mod_floor(a: i64, b: i64) -> i64 {
    debug_assert!(b > 0, "mod_floor requires a positive divisor");
    a.rem_euclid(b)
}

/// Wrap any position onto `[0, count)`. Returns 0 when `count == 0`.
#[inline]
pub fn wrap_index(i: i64, count: usize) -> LogicalIndex {
    if count == 0 {
        return 0;
    }
    mod_floor(i, count as i64) as LogicalIndex
}

/// Clamp any position into `[0, count)`. Returns 0 when `count == 0`.
#[inline]
pub fn clamp_index(i: i64, count: usize) -> LogicalIndex {
    if count == 0 {
        return 0;
    }
    i.clamp(0, count as i64 - 1) as LogicalIndex
}

/// Wrap under loop, clamp otherwise.
#[inline]
pub fn clamp_index_loop_aware(
    i: i64,
    count: usize,
    looping: bool,
) -> LogicalIndex {
    if looping {
        wrap_index(i, count)
    } else {
        clamp_index(i, count)
    }
}

/// Logical index shown at `position`.
#[inline]
pub fn logical_for_position(
    position: i64,
    count: usize,
    looping: bool,
) -> LogicalIndex {
    clamp_index_loop_aware(position, count, looping)
}

/// Target index after moving `step` slides from `index`.
pub fn step_target(
    index: LogicalIndex,
    step: i64,
    count: usize,
    looping: bool,
) -> LogicalIndex {
    clamp_index_loop_aware(index as i64 + step, count, looping)
}

/// Whether a backwards step can change anything.
pub fn can_prev(index: LogicalIndex, count: usize, looping: bool) -> bool {
    if looping { count > 1 } else { count > 0 && index > 0 }
}

/// Whether a forwards step can change anything.
pub fn can_next(index: LogicalIndex, count: usize, looping: bool) -> bool {
    if looping {
        count > 1
    } else {
        count > 0 && index + 1 < count
    }
}

/// Representation `base + k * count` of a logical index closest to
/// `center`. Ties resolve towards the lower position.
pub fn nearest_position(base: LogicalIndex, count: usize, center: i64) -> i64 {
    if count == 0 {
        return base as i64;
    }
    let n = count as i64;
    let base = base as i64;
    let k = floor_div(center - base, n);
    let below = base + k * n;
    let above = below + n;
    if (center - below) <= (above - center) {
        below
    } else {
        above
    }
}

/// Shortest signed distance from `from` to `to` on a ring of `count`
/// slides. Ties go forward.
pub fn shortest_delta(from: LogicalIndex, to: LogicalIndex, count: usize) -> i64 {
    if count == 0 {
        return 0;
    }
    let n = count as i64;
    let raw = mod_floor(to as i64 - from as i64, n);
    if raw * 2 > n { raw - n } else { raw }
}
