//! Action vocabulary
//!
//! Every state change is requested through an [`Action`]. Payloads are
//! validated by the builders in [`builders`] before an action exists, so the
//! reducer never sees a non-finite number or a negative index.

mod builders;
pub mod validate;

use crate::types::{CommitSource, Gate, LiveMode, LogicalIndex, NavigationKind};
use crate::virtualization::VirtualWindow;

/// Reducer a given action is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    Measure,
    Navigation,
    Motion,
    Virtual,
    Gate,
    A11y,
}

/// One measured frame of geometry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeasureSnapshot {
    /// Viewport size along the main axis. `None` when not yet measured.
    pub viewport_main: Option<f32>,
    pub gap: f32,
    /// Main-axis size per logical index.
    pub slide_sizes: Vec<(LogicalIndex, f32)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MeasureAction {
    /// Replace the measurement snapshot wholesale.
    Flush(MeasureSnapshot),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationAction {
    /// Observable intent only; never changes state.
    Request(NavigationKind),
    Commit {
        index: LogicalIndex,
        source: CommitSource,
    },
    SetSlideCount(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MotionAction {
    /// Arm a new motion. Tokens must strictly increase.
    Start { token: u64, animated: bool },
    /// Raw offset reported by the platform.
    ObserveScroll(f32),
    /// Drop the pending token without committing.
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VirtualAction {
    Configure { window_size: usize, overscan: usize },
    /// Result of a window computation plus the seam bucket it fell in.
    SetWindow {
        window: Option<VirtualWindow>,
        seam_bucket: Option<i64>,
    },
    Pin(LogicalIndex),
    Unpin(LogicalIndex),
    ClearPins,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GateAction {
    Set { gate: Gate, value: bool },
    SetAutoplayEnabled(bool),
    SetInterval(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum A11yAction {
    SetLiveMode(LiveMode),
    SetAnnounceEnabled(bool),
    /// Record the latest announcement (or clear it).
    Announce(Option<String>),
}

/// A validated request to change carousel state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Measure(MeasureAction),
    Navigation(NavigationAction),
    Motion(MotionAction),
    Virtual(VirtualAction),
    Gate(GateAction),
    A11y(A11yAction),
    /// Tag from a newer producer. Always reduced as a no-op.
    Unrecognized(String),
}

impl Action {
    pub fn category(&self) -> Option<ActionCategory> {
        match self {
            Action::Measure(_) => Some(ActionCategory::Measure),
            Action::Navigation(_) => Some(ActionCategory::Navigation),
            Action::Motion(_) => Some(ActionCategory::Motion),
            Action::Virtual(_) => Some(ActionCategory::Virtual),
            Action::Gate(_) => Some(ActionCategory::Gate),
            Action::A11y(_) => Some(ActionCategory::A11y),
            Action::Unrecognized(_) => None,
        }
    }

    /// Stable tag used in logs and the store journal.
    pub fn tag(&self) -> &str {
        match self {
            Action::Measure(MeasureAction::Flush(_)) => "measure/flush",
            Action::Navigation(a) => match a {
                NavigationAction::Request(_) => "navigation/request",
                NavigationAction::Commit { .. } => "navigation/commit_index",
                NavigationAction::SetSlideCount(_) => {
                    "navigation/set_slide_count"
                }
            },
            Action::Motion(a) => match a {
                MotionAction::Start { .. } => "motion/start",
                MotionAction::ObserveScroll(_) => "motion/observe_scroll",
                MotionAction::Cancel => "motion/cancel",
            },
            Action::Virtual(a) => match a {
                VirtualAction::Configure { .. } => "virtual/configure",
                VirtualAction::SetWindow { .. } => "virtual/set_window",
                VirtualAction::Pin(_) => "virtual/pin",
                VirtualAction::Unpin(_) => "virtual/unpin",
                VirtualAction::ClearPins => "virtual/clear_pins",
            },
            Action::Gate(a) => match a {
                GateAction::Set { .. } => "gate/set",
                GateAction::SetAutoplayEnabled(_) => "autoplay/set_enabled",
                GateAction::SetInterval(_) => "autoplay/set_interval",
            },
            Action::A11y(a) => match a {
                A11yAction::SetLiveMode(_) => "a11y/set_live_mode",
                A11yAction::SetAnnounceEnabled(_) => "a11y/set_announce",
                A11yAction::Announce(_) => "a11y/announce",
            },
            Action::Unrecognized(tag) => tag,
        }
    }
}

impl From<MeasureAction> for Action {
    fn from(value: MeasureAction) -> Self {
        Action::Measure(value)
    }
}

impl From<NavigationAction> for Action {
    fn from(value: NavigationAction) -> Self {
        Action::Navigation(value)
    }
}

impl From<MotionAction> for Action {
    fn from(value: MotionAction) -> Self {
        Action::Motion(value)
    }
}

impl From<VirtualAction> for Action {
    fn from(value: VirtualAction) -> Self {
        Action::Virtual(value)
    }
}

impl From<GateAction> for Action {
    fn from(value: GateAction) -> Self {
        Action::Gate(value)
    }
}

impl From<A11yAction> for Action {
    fn from(value: A11yAction) -> Self {
        Action::A11y(value)
    }
}
