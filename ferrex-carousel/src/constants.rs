//! Carousel engine constants
//!
//! Defaults for every tunable option live here so hosts that never touch
//! the options get consistent behavior across carousels.

/// Virtualization window defaults.
pub mod window {
    /// Slides mounted around the committed position (odd).
    pub const WINDOW_SIZE: usize = 3;
    /// Extra positions mounted on each side of the window.
    pub const OVERSCAN: usize = 1;
}

/// Settle detection defaults.
pub mod settle {
    /// Two samples closer than this (px) count as stable.
    pub const EPSILON_PX: f32 = 0.5;
    /// Consecutive stable samples required before a motion settles.
    pub const STABLE_FRAMES: u32 = 3;
}

/// Snap motion defaults.
pub mod motion {
    /// Duration (ms) of an animated snap to a target slide.
    pub const DURATION_MS: u64 = 300;
}

/// Pointer drag and fling defaults.
pub mod drag {
    /// Displacement (px) before a pointer press becomes a drag.
    pub const THRESHOLD_PX: f32 = 6.0;
    /// Multiplier applied to release velocity when projecting a fling.
    pub const FLING_STRENGTH: f32 = 1.0;
    /// Projection horizon (ms) of a fling at strength 1.0.
    pub const FLING_HORIZON_MS: f32 = 180.0;
    /// Release velocity (px/ms) below which a drag never flings.
    pub const FLING_MIN_VELOCITY: f32 = 0.25;
    /// A release this long (ms) after the last move reports zero velocity.
    pub const RELEASE_IDLE_MS: u64 = 100;
}

/// Autoplay defaults.
pub mod autoplay {
    /// Dwell (ms) between autoplay steps.
    pub const INTERVAL_MS: u64 = 5_000;
    /// Drift speed (px/s) for continuous autoplay.
    pub const CONTINUOUS_PX_PER_S: f32 = 40.0;
    /// Frame delta clamp (ms) so a stalled host does not jump the track.
    pub const MAX_FRAME_DELTA_MS: u64 = 33;
}

/// Accessibility defaults.
pub mod a11y {
    /// Prefix for edge announcements ("Carousel start"/"Carousel end").
    pub const EDGE_PREFIX: &str = "Carousel";
}

/// Store diagnostics.
pub mod journal {
    /// Dispatched actions retained by the optional journal.
    pub const CAPACITY: usize = 64;
}
