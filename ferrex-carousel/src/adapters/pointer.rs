use std::time::{Duration, Instant};

use crate::actions::Action;
use crate::constants::drag;
use crate::types::Gate;

/// Pointer down/up/cancel on the track. Drives the dragging gate only.
#[derive(Debug, Clone, Default)]
pub struct PointerAdapter {
    pressed: bool,
}

impl PointerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn on_down(&mut self) -> Action {
        self.pressed = true;
        Action::set_gate(Gate::Dragging, true)
    }

    pub fn on_up(&mut self) -> Action {
        self.pressed = false;
        Action::set_gate(Gate::Dragging, false)
    }

    pub fn on_cancel(&mut self) -> Action {
        self.on_up()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Start,
    Move,
    End,
}

/// Drag progress along the main axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    pub phase: DragPhase,
    /// Displacement since the previous event.
    pub delta: f32,
    /// px/ms, signed.
    pub velocity: f32,
    /// Displacement since the press.
    pub total: f32,
}

impl DragEvent {
    /// A release with no movement or velocity.
    pub fn at_rest() -> Self {
        Self {
            phase: DragPhase::End,
            delta: 0.0,
            velocity: 0.0,
            total: 0.0,
        }
    }
}

/// Accumulates pointer displacement and only reports a drag once it
/// exceeds the threshold.
#[derive(Debug, Clone)]
pub struct DragTracker {
    threshold_px: f32,
    origin: Option<(f32, Instant)>,
    last: Option<(f32, Instant)>,
    velocity: f32,
    active: bool,
}

impl DragTracker {
    pub fn new(threshold_px: f32) -> Self {
        Self {
            threshold_px: threshold_px.max(0.0),
            origin: None,
            last: None,
            velocity: 0.0,
            active: false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active
    }

    pub fn begin(&mut self, main_px: f32, now: Instant) {
        self.origin = Some((main_px, now));
        self.last = Some((main_px, now));
        self.velocity = 0.0;
        self.active = false;
    }

    pub fn update(&mut self, main_px: f32, now: Instant) -> Option<DragEvent> {
        let (origin_px, origin_at) = self.origin?;
        let (last_px, last_at) = self.last?;
        let total = main_px - origin_px;

        if !self.active {
            if total.abs() < self.threshold_px {
                return None;
            }
            self.active = true;
            self.last = Some((main_px, now));
            self.velocity = per_ms(total, now.saturating_duration_since(origin_at));
            return Some(DragEvent {
                phase: DragPhase::Start,
                delta: total,
                velocity: self.velocity,
                total,
            });
        }

        let delta = main_px - last_px;
        let dt = now.saturating_duration_since(last_at);
        if !dt.is_zero() {
            self.velocity = per_ms(delta, dt);
        }
        self.last = Some((main_px, now));
        Some(DragEvent {
            phase: DragPhase::Move,
            delta,
            velocity: self.velocity,
            total,
        })
    }

    /// Release. `None` when the press never became a drag.
    pub fn end(&mut self, now: Instant) -> Option<DragEvent> {
        let origin = self.origin.take();
        let last = self.last.take();
        let was_active = std::mem::take(&mut self.active);
        let ((origin_px, _), (last_px, last_at)) = (origin?, last?);
        if !was_active {
            return None;
        }
        let idle = now.saturating_duration_since(last_at);
        let velocity = if idle > Duration::from_millis(drag::RELEASE_IDLE_MS) {
            0.0
        } else {
            self.velocity
        };
        Some(DragEvent {
            phase: DragPhase::End,
            delta: 0.0,
            velocity,
            total: last_px - origin_px,
        })
    }

    pub fn cancel(&mut self) {
        self.origin = None;
        self.last = None;
        self.velocity = 0.0;
        self.active = false;
    }
}

fn per_ms(px: f32, dt: Duration) -> f32 {
    let ms = dt.as_secs_f32() * 1_000.0;
    if ms <= 0.0 { 0.0 } else { px / ms }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn pointer_drives_the_dragging_gate() {
        let mut pointer = PointerAdapter::new();
        assert_eq!(pointer.on_down(), Action::set_gate(Gate::Dragging, true));
        assert!(pointer.is_pressed());
        assert_eq!(
            pointer.on_cancel(),
            Action::set_gate(Gate::Dragging, false)
        );
    }

    #[test]
    fn small_movements_never_start_a_drag() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::new(6.0);
        tracker.begin(100.0, t0);
        assert_eq!(tracker.update(104.0, t0 + ms(10)), None);
        assert_eq!(tracker.update(97.0, t0 + ms(20)), None);
        assert_eq!(tracker.end(t0 + ms(30)), None);
    }

    #[test]
    fn reports_delta_velocity_and_total() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::new(6.0);
        tracker.begin(0.0, t0);

        let start = tracker.update(-10.0, t0 + ms(10)).unwrap();
        assert_eq!(start.phase, DragPhase::Start);
        assert_eq!(start.total, -10.0);
        assert!((start.velocity + 1.0).abs() < 1e-4);

        let mv = tracker.update(-30.0, t0 + ms(20)).unwrap();
        assert_eq!(mv.phase, DragPhase::Move);
        assert_eq!(mv.delta, -20.0);
        assert_eq!(mv.total, -30.0);
        assert!((mv.velocity + 2.0).abs() < 1e-4);

        let end = tracker.end(t0 + ms(30)).unwrap();
        assert_eq!(end.phase, DragPhase::End);
        assert_eq!(end.total, -30.0);
        assert!((end.velocity + 2.0).abs() < 1e-4);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn idle_release_has_no_velocity() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::new(1.0);
        tracker.begin(0.0, t0);
        tracker.update(50.0, t0 + ms(10));
        let end = tracker.end(t0 + ms(500)).unwrap();
        assert_eq!(end.velocity, 0.0);
        assert_eq!(end.total, 50.0);
    }
}
