//! Time-based tween for snapping the track to a target offset

use std::time::{Duration, Instant};

use super::easing::Easing;

#[derive(Debug, Clone, Default)]
pub struct SnapAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl SnapAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Offset the running tween is heading for.
    pub fn target(&self) -> Option<f32> {
        self.active.then_some(self.target)
    }

    pub fn start(
        &mut self,
        current: f32,
        target: f32,
        duration_ms: u64,
        easing: Easing,
        now: Instant,
    ) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = Some(now);
        self.duration = Duration::from_millis(duration_ms);
        self.easing = easing;
    }

    /// Returns `Some(next_offset)` while animating, `None` once finished or
    /// inactive. The final tick returns the exact target.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let started = self.started_at.unwrap_or(now);
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        let te = self.easing.apply(t);
        Some(self.start + (self.target - self.start) * te)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_reaches_target_and_stops() {
        let t0 = Instant::now();
        let mut animator = SnapAnimator::new();
        animator.start(0.0, 300.0, 100, Easing::Linear, t0);

        let mid = animator.tick(t0 + Duration::from_millis(50)).unwrap();
        assert!((mid - 150.0).abs() < 1.0);

        assert_eq!(animator.tick(t0 + Duration::from_millis(120)), Some(300.0));
        assert!(!animator.is_active());
        assert_eq!(animator.tick(t0 + Duration::from_millis(130)), None);
    }

    #[test]
    fn zero_duration_jumps_on_first_tick() {
        let t0 = Instant::now();
        let mut animator = SnapAnimator::new();
        animator.start(10.0, -40.0, 0, Easing::EaseOut, t0);
        assert_eq!(animator.tick(t0), Some(-40.0));
    }

    #[test]
    fn cancel_drops_target() {
        let t0 = Instant::now();
        let mut animator = SnapAnimator::new();
        animator.start(0.0, 10.0, 100, Easing::EaseOut, t0);
        assert_eq!(animator.target(), Some(10.0));
        animator.cancel();
        assert_eq!(animator.target(), None);
        assert_eq!(animator.tick(t0), None);
    }
}
