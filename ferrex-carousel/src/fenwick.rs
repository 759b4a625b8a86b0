//! Prefix-sum index (Fenwick / binary indexed tree)
//!
//! Answers "cumulative size before slide i" and "which slide covers offset
//! x" in O(log n) for variable-size tracks. Weights may be updated with
//! positive or negative deltas; the bound searches assume weights stay
//! non-negative so prefix sums are monotone.

use crate::error::{CarouselError, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FenwickTree {
    /// 1-based implicit tree; `tree[0]` is unused.
    tree: Vec<f64>,
    /// Plain weights, kept for O(1) point reads and `set`.
    values: Vec<f64>,
}

impl FenwickTree {
    /// Tree of `len` zero weights.
    pub fn new(len: usize) -> Self {
        Self {
            tree: vec![0.0; len + 1],
            values: vec![0.0; len],
        }
    }

    /// Build from explicit weights in O(n).
    pub fn from_weights(weights: &[f64]) -> Result<Self> {
        let mut tree = vec![0.0; weights.len() + 1];
        for (i, &w) in weights.iter().enumerate() {
            ensure_finite("weight", w)?;
            tree[i + 1] += w;
            let parent = (i + 1) + lowbit(i + 1);
            if parent <= weights.len() {
                let carried = tree[i + 1];
                tree[parent] += carried;
            }
        }
        Ok(Self {
            tree,
            values: weights.to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Weight at `index`.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.values[index])
    }

    /// Add `delta` (positive or negative) to the weight at `index`.
    pub fn add(&mut self, index: usize, delta: f64) -> Result<()> {
        self.check_index(index)?;
        ensure_finite("delta", delta)?;
        self.values[index] += delta;
        let mut i = index + 1;
        while i < self.tree.len() {
            self.tree[i] += delta;
            i += lowbit(i);
        }
        Ok(())
    }

    /// Replace the weight at `index`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        self.check_index(index)?;
        ensure_finite("value", value)?;
        let delta = value - self.values[index];
        if delta == 0.0 {
            return Ok(());
        }
        self.add(index, delta)
    }

    /// Sum of weights in `[0, end)`.
    pub fn prefix_sum(&self, end: usize) -> Result<f64> {
        if end > self.len() {
            return Err(CarouselError::InvalidRange {
                start: 0,
                end,
                len: self.len(),
            });
        }
        let mut sum = 0.0;
        let mut i = end;
        while i > 0 {
            sum += self.tree[i];
            i -= lowbit(i);
        }
        Ok(sum)
    }

    /// Sum of weights in `[start, end)`.
    pub fn range_sum(&self, start: usize, end: usize) -> Result<f64> {
        if start > end || end > self.len() {
            return Err(CarouselError::InvalidRange {
                start,
                end,
                len: self.len(),
            });
        }
        Ok(self.prefix_sum(end)? - self.prefix_sum(start)?)
    }

    /// Sum of every weight.
    pub fn total(&self) -> f64 {
        let mut sum = 0.0;
        let mut i = self.len();
        while i > 0 {
            sum += self.tree[i];
            i -= lowbit(i);
        }
        sum
    }

    /// Smallest index `i` with `prefix_sum(i + 1) >= target`.
    ///
    /// Returns `len()` when the total is below `target`, and 0 for
    /// non-positive targets.
    pub fn lower_bound(&self, target: f64) -> usize {
        self.descend(target, |node, rem| node < rem)
    }

    /// Smallest index `i` with `prefix_sum(i + 1) > target`; the slide
    /// covering offset `target` when weights are slide extents.
    pub fn upper_bound(&self, target: f64) -> usize {
        self.descend(target, |node, rem| node <= rem)
    }

    fn descend(&self, target: f64, advance: impl Fn(f64, f64) -> bool) -> usize {
        let n = self.len();
        if n == 0 {
            return 0;
        }
        let mut pos = 0usize;
        let mut rem = target;
        let mut step = highest_power_of_two(n);
        while step > 0 {
            let next = pos + step;
            if next <= n && advance(self.tree[next], rem) {
                pos = next;
                rem -= self.tree[next];
            }
            step >>= 1;
        }
        pos
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(CarouselError::IndexOutOfRange {
                field: "fenwick",
                index,
                len: self.len(),
            });
        }
        Ok(())
    }
}

#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

#[inline]
fn highest_power_of_two(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        1 << (usize::BITS - 1 - n.leading_zeros())
    }
}

fn ensure_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CarouselError::NonFinite { field, value })
    }
}
