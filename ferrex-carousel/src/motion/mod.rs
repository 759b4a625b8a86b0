//! Snap motion: easing curves, the host-clocked tween and fling projection.

pub mod animator;
pub mod easing;
pub mod fling;

pub use animator::SnapAnimator;
pub use easing::Easing;
pub use fling::fling_steps;

/// How the host should move the track to a navigation target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollBehavior {
    /// Jump straight to the target (motion disabled or reduced motion).
    Instant,
    /// Animate to the target. Hosts may run their own native smooth scroll
    /// or apply the offsets returned from each engine frame.
    Animated { duration_ms: u64, easing: Easing },
}

/// Scroll request produced by a navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    /// Motion token the settle boundary will be matched against.
    pub token: u64,
    /// Position-space slot the motion lands on.
    pub target_position: i64,
    /// Main-axis scroll offset to reach.
    pub target_px: f32,
    pub behavior: ScrollBehavior,
}
