use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::math::clamp_index;
use crate::options::CarouselOptions;
use crate::types::{Axis, Gate, LiveMode, LogicalIndex, ReadingDirection};
use crate::virtualization::VirtualWindow;

/// Last flushed measurement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeasureState {
    /// `None` until the first measurement.
    pub viewport_main: Option<f32>,
    pub gap: f32,
    pub slide_size_by_index: BTreeMap<LogicalIndex, f32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VirtualState {
    pub window_size: usize,
    pub overscan: usize,
    pub window: Option<VirtualWindow>,
    pub pinned: BTreeSet<LogicalIndex>,
    pub epoch: u64,
    /// Seam bucket of the current window; `None` before the first window.
    pub seam_bucket: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionState {
    /// Last issued motion token.
    pub token: u64,
    /// Token awaiting settle.
    pub pending_token: Option<u64>,
    pub is_animating: bool,
}

/// Boolean conditions blocking autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GateSet {
    pub manual_pause: bool,
    pub hover: bool,
    pub focus_within: bool,
    pub dragging: bool,
    pub visibility_hidden: bool,
    pub reduced_motion: bool,
}

impl GateSet {
    pub fn get(&self, gate: Gate) -> bool {
        match gate {
            Gate::ManualPause => self.manual_pause,
            Gate::Hover => self.hover,
            Gate::FocusWithin => self.focus_within,
            Gate::Dragging => self.dragging,
            Gate::VisibilityHidden => self.visibility_hidden,
            Gate::ReducedMotion => self.reduced_motion,
        }
    }

    pub fn with(mut self, gate: Gate, value: bool) -> Self {
        let slot = match gate {
            Gate::ManualPause => &mut self.manual_pause,
            Gate::Hover => &mut self.hover,
            Gate::FocusWithin => &mut self.focus_within,
            Gate::Dragging => &mut self.dragging,
            Gate::VisibilityHidden => &mut self.visibility_hidden,
            Gate::ReducedMotion => &mut self.reduced_motion,
        };
        *slot = value;
        self
    }

    pub fn any(&self) -> bool {
        Gate::ALL.iter().any(|&g| self.get(g))
    }

    /// Set gates in reporting order.
    pub fn active(&self) -> impl Iterator<Item = Gate> + '_ {
        Gate::ALL.into_iter().filter(move |&g| self.get(g))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoplayState {
    pub enabled: bool,
    pub interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct A11yState {
    pub live_mode: LiveMode,
    pub announce_enabled: bool,
    pub last_announcement: Option<String>,
}

/// The single owned aggregate. Replaced, never mutated in place.
///
/// Sub-states that own heap data sit behind `Arc` so reducing one category
/// shares the others with the previous state.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    pub axis: Axis,
    pub direction: ReadingDirection,
    pub looping: bool,
    pub slide_count: usize,
    /// Committed logical index. Always `< slide_count`, or 0 when empty.
    pub index: LogicalIndex,
    pub scroll_px: f32,
    pub is_dragging: bool,
    pub measure: Arc<MeasureState>,
    pub virtualization: Arc<VirtualState>,
    pub motion: MotionState,
    pub gates: GateSet,
    pub autoplay: AutoplayState,
    pub a11y: Arc<A11yState>,
}

impl CarouselState {
    pub fn new(options: &CarouselOptions) -> Self {
        let layout = &options.layout;
        Self {
            axis: layout.axis,
            direction: layout.direction,
            looping: layout.looping,
            slide_count: options.slide_count,
            index: clamp_index(
                options.initial_index as i64,
                options.slide_count,
            ),
            scroll_px: 0.0,
            is_dragging: false,
            measure: Arc::new(MeasureState::default()),
            virtualization: Arc::new(VirtualState {
                window_size: layout.window_size,
                overscan: layout.overscan,
                ..VirtualState::default()
            }),
            motion: MotionState::default(),
            gates: GateSet::default(),
            autoplay: AutoplayState {
                enabled: options.autoplay.enabled,
                interval_ms: options.autoplay.interval_ms,
            },
            a11y: Arc::new(A11yState {
                live_mode: options.a11y.live_mode,
                announce_enabled: options.a11y.announce,
                last_announcement: None,
            }),
        }
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(&CarouselOptions::default())
    }
}
