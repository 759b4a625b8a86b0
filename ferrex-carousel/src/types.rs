//! Shared vocabulary types for the carousel engine

/// Stable 0-based slide identity, independent of render position.
pub type LogicalIndex = usize;

/// Main scroll axis of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// Reading direction. Only affects horizontal tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ReadingDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Which point of a slide snaps onto the matching viewport line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl Align {
    /// Offset of the alignment point inside a span of `size` pixels.
    pub fn point_in(self, size: f32) -> f32 {
        match self {
            Align::Start => 0.0,
            Align::Center => size / 2.0,
            Align::End => size,
        }
    }
}

/// Politeness of the live region that carries announcements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LiveMode {
    Off,
    #[default]
    Polite,
    Assertive,
}

impl LiveMode {
    /// Attribute value as understood by assistive technology.
    pub fn as_str(self) -> &'static str {
        match self {
            LiveMode::Off => "off",
            LiveMode::Polite => "polite",
            LiveMode::Assertive => "assertive",
        }
    }
}

/// Independent boolean conditions that block autoplay while set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Gate {
    ManualPause,
    Hover,
    FocusWithin,
    Dragging,
    VisibilityHidden,
    ReducedMotion,
}

impl Gate {
    /// Every gate, in the order blocking reasons are reported.
    pub const ALL: [Gate; 6] = [
        Gate::ManualPause,
        Gate::Hover,
        Gate::FocusWithin,
        Gate::Dragging,
        Gate::VisibilityHidden,
        Gate::ReducedMotion,
    ];
}

/// Origin of an index commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitSource {
    /// Settle boundary of the motion identified by `token`. Rejected unless
    /// `token` is the pending token.
    Settle { token: u64 },
    /// Host-driven commit outside the motion lifecycle.
    External,
}

/// Navigation intent carried by a request action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationKind {
    Next,
    Prev,
    GoTo(LogicalIndex),
}
