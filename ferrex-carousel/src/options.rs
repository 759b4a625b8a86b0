//! Inbound configuration for a carousel instance.
//!
//! Every struct defaults from [`crate::constants`] and validates into a
//! construction error rather than clamping, since options come from the
//! host once per session instead of from transient platform state.

use crate::actions::validate;
use crate::constants;
use crate::error::{CarouselError, Result};
use crate::motion::Easing;
use crate::types::{Align, Axis, LiveMode, ReadingDirection};

/// Layout facts fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LayoutOptions {
    pub axis: Axis,
    pub direction: ReadingDirection,
    pub align: Align,
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looping: bool,
    /// Mounted slides around the committed position. Must be odd.
    pub window_size: usize,
    /// Extra mounted positions on each side of the window.
    pub overscan: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            axis: Axis::default(),
            direction: ReadingDirection::default(),
            align: Align::default(),
            looping: false,
            window_size: constants::window::WINDOW_SIZE,
            overscan: constants::window::OVERSCAN,
        }
    }
}

impl LayoutOptions {
    pub fn validate(&self) -> Result<()> {
        validate::window_size(self.window_size as i64).map(|_| ())
    }
}

/// Minimum displacement from the baseline snap point before a settle
/// boundary may move the committed index.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CommitThreshold {
    /// Absolute pixels.
    Px(f32),
    /// Fraction of the viewport main size.
    ViewportFraction(f32),
    /// Fraction of the baseline slide's main size.
    SlideFraction(f32),
    /// Fraction of the distance between baseline and candidate snap points.
    DistanceFraction(f32),
}

impl CommitThreshold {
    /// Threshold in pixels for the given measurements.
    pub fn resolve(
        self,
        viewport_main: f32,
        baseline_size: f32,
        snap_distance: f32,
    ) -> f32 {
        let px = match self {
            CommitThreshold::Px(px) => px,
            CommitThreshold::ViewportFraction(f) => f * viewport_main,
            CommitThreshold::SlideFraction(f) => f * baseline_size,
            CommitThreshold::DistanceFraction(f) => f * snap_distance.abs(),
        };
        px.max(0.0)
    }

    fn raw(self) -> f32 {
        match self {
            CommitThreshold::Px(v)
            | CommitThreshold::ViewportFraction(v)
            | CommitThreshold::SlideFraction(v)
            | CommitThreshold::DistanceFraction(v) => v,
        }
    }

    pub fn validate(self) -> Result<()> {
        ensure_non_negative("commit_threshold", self.raw())
    }
}

/// Pointer and stepping behavior.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct InteractionOptions {
    pub draggable: bool,
    /// Slides moved per next/prev.
    pub step: usize,
    pub drag_threshold_px: f32,
    pub commit_threshold: Option<CommitThreshold>,
    pub fling: bool,
    pub fling_strength: f32,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            draggable: true,
            step: 1,
            drag_threshold_px: constants::drag::THRESHOLD_PX,
            commit_threshold: None,
            fling: true,
            fling_strength: constants::drag::FLING_STRENGTH,
        }
    }
}

impl InteractionOptions {
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(CarouselError::InvalidOption {
                field: "step",
                reason: "must be at least 1".into(),
            });
        }
        ensure_non_negative("drag_threshold_px", self.drag_threshold_px)?;
        ensure_non_negative("fling_strength", self.fling_strength)?;
        if let Some(threshold) = self.commit_threshold {
            threshold.validate()?;
        }
        Ok(())
    }
}

/// Snap animation and settle detection tuning.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MotionOptions {
    /// Jump instead of animating.
    pub disabled: bool,
    pub duration_ms: u64,
    pub easing: Easing,
    pub settle_epsilon_px: f32,
    pub settle_frames: u32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            disabled: false,
            duration_ms: constants::motion::DURATION_MS,
            easing: Easing::default(),
            settle_epsilon_px: constants::settle::EPSILON_PX,
            settle_frames: constants::settle::STABLE_FRAMES,
        }
    }
}

impl MotionOptions {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("settle_epsilon_px", self.settle_epsilon_px)?;
        if self.settle_frames == 0 {
            return Err(CarouselError::InvalidOption {
                field: "settle_frames",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MeasureOptions {
    /// React to viewport and slide size changes.
    pub observe_resize: bool,
    /// Coalesce re-measurement to the next frame instead of measuring inline.
    pub remeasure_next_frame: bool,
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            observe_resize: true,
            remeasure_next_frame: true,
        }
    }
}

/// Autoplay advance style. Both obey the same gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AutoplayMode {
    /// One navigation step per interval.
    #[default]
    Step,
    /// Constant drift; slides commit as they pass the snap line.
    Continuous,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AutoplayOptions {
    pub enabled: bool,
    pub mode: AutoplayMode,
    /// Dwell between steps. Zero blocks autoplay.
    pub interval_ms: u64,
    pub continuous_px_per_s: f32,
    /// Restart the dwell after a user-initiated navigation.
    pub resume_after_interaction: bool,
    /// Let the page visibility block autoplay.
    pub pause_when_hidden: bool,
}

impl Default for AutoplayOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: AutoplayMode::default(),
            interval_ms: constants::autoplay::INTERVAL_MS,
            continuous_px_per_s: constants::autoplay::CONTINUOUS_PX_PER_S,
            resume_after_interaction: true,
            pause_when_hidden: true,
        }
    }
}

impl AutoplayOptions {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("continuous_px_per_s", self.continuous_px_per_s)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct A11yOptions {
    /// Accessible name of the carousel root.
    pub label: Option<String>,
    /// Live-region politeness used while autoplay is not running.
    pub live_mode: LiveMode,
    pub announce: bool,
    /// Prefix for edge announcements.
    pub edge_prefix: String,
}

impl Default for A11yOptions {
    fn default() -> Self {
        Self {
            label: None,
            live_mode: LiveMode::default(),
            announce: true,
            edge_prefix: constants::a11y::EDGE_PREFIX.to_string(),
        }
    }
}

/// Everything the host configures for one carousel.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CarouselOptions {
    pub slide_count: usize,
    pub initial_index: usize,
    pub layout: LayoutOptions,
    pub interaction: InteractionOptions,
    pub motion: MotionOptions,
    pub measure: MeasureOptions,
    pub autoplay: AutoplayOptions,
    pub a11y: A11yOptions,
}

impl CarouselOptions {
    /// Defaults for `slide_count` slides.
    pub fn with_slides(slide_count: usize) -> Self {
        Self {
            slide_count,
            ..Self::default()
        }
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.layout.looping = looping;
        self
    }

    pub fn initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        self.interaction.validate()?;
        self.motion.validate()?;
        self.autoplay.validate()?;
        if self.slide_count > 0 && self.initial_index >= self.slide_count {
            return Err(CarouselError::IndexOutOfRange {
                field: "initial_index",
                index: self.initial_index,
                len: self.slide_count,
            });
        }
        Ok(())
    }
}

fn ensure_non_negative(field: &'static str, value: f32) -> Result<()> {
    validate::non_negative(field, value as f64).map(|_| ())
}
