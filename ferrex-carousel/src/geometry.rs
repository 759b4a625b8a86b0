//! Slide geometry capability
//!
//! The engine never looks up platform elements itself. Hosts hand it a
//! [`SlideGeometry`] that answers main-axis questions about the viewport and
//! the currently mounted slides. [`TrackLayout`] is a headless
//! implementation that lays positions out on a line.

use crate::error::{CarouselError, Result};
use crate::fenwick::FenwickTree;
use crate::math::{floor_div, logical_for_position, mod_floor};
use crate::types::{Align, LogicalIndex};
use crate::virtualization::RenderSlot;

/// Main-axis extent of one mounted slide, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideRect {
    pub position: i64,
    pub logical_index: LogicalIndex,
    pub start: f32,
    pub size: f32,
}

impl SlideRect {
    /// Content offset of the slide's alignment point.
    pub fn align_point(&self, align: Align) -> f32 {
        self.start + align.point_in(self.size)
    }

    /// Scroll offset that puts the alignment point on the snap line.
    pub fn snap_offset(&self, align: Align, viewport_main: f32) -> f32 {
        self.align_point(align) - align.point_in(viewport_main)
    }
}

/// Read access to measured geometry.
pub trait SlideGeometry {
    /// `None` until the viewport has been measured.
    fn viewport_main(&self) -> Option<f32>;

    fn gap(&self) -> f32;

    /// Rects of every currently mounted slide.
    fn mounted_slides(&self) -> Vec<SlideRect>;

    /// Rect of a position, mounted or not, if it can be known.
    fn slide_rect(&self, position: i64) -> Option<SlideRect>;

    /// Called whenever the mounted slot list changes.
    fn sync_mounted(&mut self, _slots: &[RenderSlot]) {}
}

#[derive(Debug, Clone)]
enum Sizes {
    Uniform(f32),
    /// Per-slide sizes plus a prefix-sum index over `size + gap` strides.
    Variable { sizes: Vec<f32>, strides: FenwickTree },
}

/// Headless track: positions laid out back to back with a fixed gap.
#[derive(Debug, Clone)]
pub struct TrackLayout {
    count: usize,
    looping: bool,
    gap: f32,
    viewport_main: Option<f32>,
    sizes: Sizes,
    mounted: Vec<i64>,
}

impl TrackLayout {
    /// Every slide `slide_size` wide.
    pub fn uniform(count: usize, slide_size: f32, gap: f32) -> Result<Self> {
        check_size("slide_size", slide_size)?;
        check_size("gap", gap)?;
        Ok(Self {
            count,
            looping: false,
            gap,
            viewport_main: None,
            sizes: Sizes::Uniform(slide_size),
            mounted: Vec::new(),
        })
    }

    /// One size per slide.
    pub fn variable(sizes: &[f32], gap: f32) -> Result<Self> {
        check_size("gap", gap)?;
        for &size in sizes {
            check_size("slide_size", size)?;
        }
        let strides: Vec<f64> =
            sizes.iter().map(|&s| (s + gap) as f64).collect();
        Ok(Self {
            count: sizes.len(),
            looping: false,
            gap,
            viewport_main: None,
            sizes: Sizes::Variable {
                sizes: sizes.to_vec(),
                strides: FenwickTree::from_weights(&strides)?,
            },
            mounted: Vec::new(),
        })
    }

    pub fn with_viewport(mut self, viewport_main: f32) -> Self {
        self.viewport_main = Some(viewport_main.max(0.0));
        self
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn set_viewport(&mut self, viewport_main: Option<f32>) {
        self.viewport_main = viewport_main.map(|v| v.max(0.0));
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Resize one slide. Uniform tracks become variable.
    pub fn set_slide_size(
        &mut self,
        index: LogicalIndex,
        size: f32,
    ) -> Result<()> {
        check_size("slide_size", size)?;
        if index >= self.count {
            return Err(CarouselError::IndexOutOfRange {
                field: "slide_index",
                index,
                len: self.count,
            });
        }
        if let Sizes::Uniform(uniform) = self.sizes {
            let sizes = vec![uniform; self.count];
            let strides: Vec<f64> =
                sizes.iter().map(|&s| (s + self.gap) as f64).collect();
            self.sizes = Sizes::Variable {
                sizes,
                strides: FenwickTree::from_weights(&strides)?,
            };
        }
        if let Sizes::Variable { sizes, strides } = &mut self.sizes {
            sizes[index] = size;
            strides.set(index, (size + self.gap) as f64)?;
        }
        Ok(())
    }

    pub fn size_of(&self, index: LogicalIndex) -> f32 {
        match &self.sizes {
            Sizes::Uniform(size) => *size,
            Sizes::Variable { sizes, .. } => {
                sizes.get(index).copied().unwrap_or(0.0)
            }
        }
    }

    /// Length of one full cycle of slides including trailing gaps.
    pub fn cycle_len(&self) -> f32 {
        match &self.sizes {
            Sizes::Uniform(size) => (size + self.gap) * self.count as f32,
            Sizes::Variable { strides, .. } => strides.total() as f32,
        }
    }

    /// Content offset where `position` starts.
    pub fn offset_of(&self, position: i64) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        let n = self.count as i64;
        let cycle = floor_div(position, n);
        let within = mod_floor(position, n) as usize;
        let head = match &self.sizes {
            Sizes::Uniform(size) => (size + self.gap) * within as f32,
            Sizes::Variable { strides, .. } => {
                strides.prefix_sum(within).unwrap_or(0.0) as f32
            }
        };
        cycle as f32 * self.cycle_len() + head
    }

    /// Position whose stride contains `offset`. Clamped without loop.
    pub fn position_at_offset(&self, offset: f32) -> Option<i64> {
        if self.count == 0 {
            return None;
        }
        let cycle_len = self.cycle_len();
        if cycle_len <= 0.0 {
            return Some(0);
        }
        let n = self.count as i64;
        let cycle = (offset / cycle_len).floor();
        let within = offset - cycle * cycle_len;
        let index = match &self.sizes {
            Sizes::Uniform(size) => {
                let stride = size + self.gap;
                if stride <= 0.0 {
                    0
                } else {
                    (within / stride).floor() as i64
                }
            }
            Sizes::Variable { strides, .. } => {
                strides.upper_bound(within as f64) as i64
            }
        }
        .min(n - 1);
        let position = cycle as i64 * n + index;
        Some(if self.looping {
            position
        } else {
            position.clamp(0, n - 1)
        })
    }

    fn rect(&self, position: i64) -> SlideRect {
        let logical_index =
            logical_for_position(position, self.count, self.looping);
        SlideRect {
            position,
            logical_index,
            start: self.offset_of(position),
            size: self.size_of(logical_index),
        }
    }
}

impl SlideGeometry for TrackLayout {
    fn viewport_main(&self) -> Option<f32> {
        self.viewport_main
    }

    fn gap(&self) -> f32 {
        self.gap
    }

    fn mounted_slides(&self) -> Vec<SlideRect> {
        self.mounted.iter().map(|&p| self.rect(p)).collect()
    }

    fn slide_rect(&self, position: i64) -> Option<SlideRect> {
        if self.count == 0 {
            return None;
        }
        if !self.looping && !(0..self.count as i64).contains(&position) {
            return None;
        }
        Some(self.rect(position))
    }

    fn sync_mounted(&mut self, slots: &[RenderSlot]) {
        self.mounted.clear();
        self.mounted.extend(slots.iter().map(|slot| slot.position));
    }
}

fn check_size(field: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(CarouselError::NonFinite {
            field,
            value: value as f64,
        });
    }
    if value < 0.0 {
        return Err(CarouselError::Negative {
            field,
            value: value as f64,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_offsets_wrap_across_cycles() {
        let track = TrackLayout::uniform(4, 100.0, 10.0).unwrap().looping(true);
        assert_eq!(track.cycle_len(), 440.0);
        assert_eq!(track.offset_of(0), 0.0);
        assert_eq!(track.offset_of(2), 220.0);
        assert_eq!(track.offset_of(-1), -110.0);
        assert_eq!(track.offset_of(5), 550.0);
    }

    #[test]
    fn variable_offsets_use_prefix_sums() {
        let track = TrackLayout::variable(&[100.0, 50.0, 200.0], 0.0).unwrap();
        assert_eq!(track.offset_of(1), 100.0);
        assert_eq!(track.offset_of(2), 150.0);
        assert_eq!(track.position_at_offset(0.0), Some(0));
        assert_eq!(track.position_at_offset(99.0), Some(0));
        assert_eq!(track.position_at_offset(100.0), Some(1));
        assert_eq!(track.position_at_offset(349.0), Some(2));
        assert_eq!(track.position_at_offset(900.0), Some(2));
        assert_eq!(track.position_at_offset(-20.0), Some(0));
    }

    #[test]
    fn looping_lookup_returns_unbounded_positions() {
        let track = TrackLayout::variable(&[100.0, 50.0], 10.0)
            .unwrap()
            .looping(true);
        // cycle = 110 + 60 = 170
        assert_eq!(track.position_at_offset(-10.0), Some(-1));
        assert_eq!(track.position_at_offset(175.0), Some(2));
    }

    #[test]
    fn resizing_a_uniform_slide_switches_to_variable() {
        let mut track = TrackLayout::uniform(3, 100.0, 0.0).unwrap();
        track.set_slide_size(1, 40.0).unwrap();
        assert_eq!(track.offset_of(2), 140.0);
        assert_eq!(track.size_of(1), 40.0);
        assert!(track.set_slide_size(3, 10.0).is_err());
        assert!(track.set_slide_size(0, f32::NAN).is_err());
    }

    #[test]
    fn non_loop_rects_stay_in_range() {
        let track = TrackLayout::uniform(3, 100.0, 0.0).unwrap();
        assert!(track.slide_rect(-1).is_none());
        assert!(track.slide_rect(3).is_none());
        let rect = track.slide_rect(2).unwrap();
        assert_eq!(rect.align_point(Align::Center), 250.0);
        assert_eq!(rect.snap_offset(Align::Center, 100.0), 200.0);
    }
}
