//! Engine facade
//!
//! [`CarouselEngine`] owns the store and every stateful helper around it
//! (settle machine, frame sampler, snap animator, autoplay ticker, adapters)
//! and exposes one method per platform signal. Hosts call
//! [`on_frame`](CarouselEngine::on_frame) from their frame driver and apply
//! whatever offsets and slots come back.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::a11y::{AnnounceInput, AnnounceReason, Announcer};
use crate::actions::{Action, NavigationAction};
use crate::adapters::{
    DragEvent, DragTracker, FocusAdapter, FocusTarget,
    HoverAdapter, Key, KeyboardAdapter, MeasureScheduler, PointerAdapter,
    ReducedMotionAdapter, ScrollSink, VisibilityAdapter, measure_action,
    scroll_target,
};
use crate::autoplay::{
    AutoplayController, AutoplayInput, AutoplayPolicy, GateEvaluation,
    IntervalTicker, evaluate, policy,
};
use crate::constants;
use crate::error::Result;
use crate::geometry::SlideGeometry;
use crate::math::{can_next, can_prev, logical_for_position, nearest_position};
use crate::motion::{
    ScrollBehavior, ScrollCommand, SnapAnimator, fling_steps,
};
use crate::options::{AutoplayMode, CarouselOptions};
use crate::settle::{
    CommitDecision, CommitInput, FrameSampler, SettleConfig, SettleMachine,
    nearest_slide, resolve_commit,
};
use crate::store::{CarouselState, GateSet, Store};
use crate::types::{
    Axis, CommitSource, Gate, LiveMode, LogicalIndex, NavigationKind,
    ReadingDirection,
};
use crate::virtualization::{
    RenderSlot, WindowInput, compute_window, render_slots, seam_bucket,
};

/// Control flags for the host's prev/next buttons and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Affordances {
    pub can_prev: bool,
    pub can_next: bool,
    pub is_dragging: bool,
    pub is_animating: bool,
}

/// What the host should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameOutput {
    /// Offset to scroll the track to.
    pub scroll_to: Option<f32>,
    /// Navigation started by autoplay during this frame.
    pub command: Option<ScrollCommand>,
    /// Index committed during this frame.
    pub committed: Option<LogicalIndex>,
    /// The mounted slot list changed.
    pub slots_changed: bool,
}

#[derive(Debug)]
pub struct CarouselEngine<G: SlideGeometry> {
    options: CarouselOptions,
    geometry: G,
    store: Store,
    settle: SettleMachine,
    sampler: FrameSampler,
    animator: SnapAnimator,
    /// Tween queued by a navigation until the next frame supplies a clock.
    pending_animation: Option<(f32, f32)>,
    /// Offset the host has not been told to scroll to yet.
    pending_scroll: Option<f32>,
    ticker: IntervalTicker,
    restart_dwell: bool,
    autoplay_running: bool,
    measure: MeasureScheduler,
    pointer: PointerAdapter,
    drag: DragTracker,
    /// The current press stopped a motion mid-flight.
    press_interrupted: bool,
    hover: HoverAdapter,
    focus: FocusAdapter,
    visibility: VisibilityAdapter,
    keyboard: KeyboardAdapter,
    sink: ScrollSink,
    /// Position of the committed slide.
    anchor_position: i64,
    /// Position the in-flight motion is heading for.
    target_position: Option<i64>,
    motion_reason: AnnounceReason,
    last_frame: Option<Instant>,
    announcer: Announcer,
}

impl<G: SlideGeometry> CarouselEngine<G> {
    pub fn new(options: CarouselOptions, geometry: G) -> Result<Self> {
        options.validate()?;
        let state = CarouselState::new(&options);
        let anchor_position = state.index as i64;
        let layout = &options.layout;
        let mut engine = Self {
            settle: SettleMachine::new(SettleConfig {
                epsilon_px: options.motion.settle_epsilon_px,
                stable_frames: options.motion.settle_frames,
            }),
            sampler: FrameSampler::new(),
            animator: SnapAnimator::new(),
            pending_animation: None,
            pending_scroll: None,
            ticker: IntervalTicker::new(),
            restart_dwell: false,
            autoplay_running: false,
            measure: MeasureScheduler::new(
                options.measure.observe_resize,
                options.measure.remeasure_next_frame,
            ),
            pointer: PointerAdapter::new(),
            drag: DragTracker::new(options.interaction.drag_threshold_px),
            press_interrupted: false,
            hover: HoverAdapter::new(),
            focus: FocusAdapter::new(),
            visibility: VisibilityAdapter::new(
                options.autoplay.pause_when_hidden,
            ),
            keyboard: KeyboardAdapter::new(layout.axis, layout.direction),
            sink: ScrollSink::new(),
            anchor_position,
            target_position: None,
            motion_reason: AnnounceReason::Navigation,
            last_frame: None,
            announcer: Announcer::new(
                options.a11y.edge_prefix.clone(),
                options.a11y.live_mode,
            ),
            store: Store::new(state)
                .with_journal(constants::journal::CAPACITY),
            geometry,
            options,
        };
        engine.measure.schedule();
        engine.refresh_window();
        engine.seed_track();
        engine.apply_autoplay_policy();
        Ok(engine)
    }

    // -- outputs ----------------------------------------------------------

    pub fn index(&self) -> LogicalIndex {
        self.store.state().index
    }

    pub fn state(&self) -> &CarouselState {
        self.store.state()
    }

    pub fn snapshot(&self) -> Arc<CarouselState> {
        self.store.snapshot()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Mutable geometry access. Call [`on_resize`](Self::on_resize) after
    /// changing sizes.
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    /// Handle for the raw scroll callback.
    pub fn scroll_sink(&self) -> ScrollSink {
        self.sink.clone()
    }

    pub fn render_slots(&self) -> Vec<RenderSlot> {
        let state = self.store.state();
        render_slots(
            state.virtualization.window.as_ref(),
            state.virtualization.epoch,
            state.slide_count,
            state.looping,
        )
    }

    pub fn affordances(&self) -> Affordances {
        let state = self.store.state();
        Affordances {
            can_prev: can_prev(state.index, state.slide_count, state.looping),
            can_next: can_next(state.index, state.slide_count, state.looping),
            is_dragging: state.is_dragging,
            is_animating: state.motion.is_animating,
        }
    }

    pub fn announcer(&self) -> &Announcer {
        &self.announcer
    }

    pub fn autoplay(&mut self) -> AutoplayController<'_, G> {
        AutoplayController::new(self)
    }

    pub fn autoplay_evaluation(&self) -> GateEvaluation {
        evaluate(&AutoplayInput::from(self.store.state()))
    }

    pub fn autoplay_policy(&self) -> AutoplayPolicy {
        let state = self.store.state();
        policy(
            &self.autoplay_evaluation(),
            state.a11y.announce_enabled,
            self.options.a11y.live_mode,
        )
    }

    pub fn gates(&self) -> GateSet {
        self.store.state().gates
    }

    // -- navigation -------------------------------------------------------

    pub fn next(&mut self) -> Option<ScrollCommand> {
        self.navigate(NavigationKind::Next, AnnounceReason::Navigation)
    }

    pub fn prev(&mut self) -> Option<ScrollCommand> {
        self.navigate(NavigationKind::Prev, AnnounceReason::Navigation)
    }

    pub fn goto(&mut self, index: LogicalIndex) -> Option<ScrollCommand> {
        self.navigate(NavigationKind::GoTo(index), AnnounceReason::Navigation)
    }

    pub fn first(&mut self) -> Option<ScrollCommand> {
        self.goto(0)
    }

    pub fn last(&mut self) -> Option<ScrollCommand> {
        let count = self.store.state().slide_count;
        self.goto(count.saturating_sub(1))
    }

    /// Request a navigation. Returns the scroll the host should perform, or
    /// `None` when nothing moves (edge without loop, empty carousel) or the
    /// index was committed immediately because nothing is measured yet.
    pub fn navigate(
        &mut self,
        kind: NavigationKind,
        reason: AnnounceReason,
    ) -> Option<ScrollCommand> {
        self.store.dispatch(NavigationAction::Request(kind).into());
        let target = self.target_for(kind)?;
        if reason != AnnounceReason::Autoplay {
            self.note_interaction();
        }
        self.begin_motion(target, reason)
    }

    fn target_for(&self, kind: NavigationKind) -> Option<i64> {
        let state = self.store.state();
        let count = state.slide_count;
        if count == 0 {
            return None;
        }
        let n = count as i64;
        let looping = state.looping;
        let base = self.target_position.unwrap_or(self.anchor_position);
        let base_index = logical_for_position(base, count, looping);
        let step = self.options.interaction.step as i64;
        let target = match kind {
            NavigationKind::Next => {
                if !can_next(base_index, count, looping) {
                    return None;
                }
                if looping { base + step } else { (base + step).min(n - 1) }
            }
            NavigationKind::Prev => {
                if !can_prev(base_index, count, looping) {
                    return None;
                }
                if looping { base - step } else { (base - step).max(0) }
            }
            NavigationKind::GoTo(index) => {
                let index = index.min(count - 1);
                if looping {
                    nearest_position(index, count, base)
                } else {
                    index as i64
                }
            }
        };
        if target == base && self.target_position.is_none() {
            return None;
        }
        Some(target)
    }

    fn begin_motion(
        &mut self,
        target_position: i64,
        reason: AnnounceReason,
    ) -> Option<ScrollCommand> {
        let state = self.store.snapshot();
        let token = state.motion.token + 1;
        let animated =
            !(self.options.motion.disabled || state.gates.reduced_motion);
        let current_px = self.current_px();

        self.animator.cancel();
        self.pending_animation = None;
        self.store.dispatch(Action::start_motion(token, animated));
        self.target_position = Some(target_position);
        self.motion_reason = reason;
        self.refresh_window();
        self.settle.start(token, current_px);

        let align = self.options.layout.align;
        let Some(target_px) =
            scroll_target(&self.geometry, target_position, align)
        else {
            log::debug!("no geometry for position {target_position}, committing directly");
            self.settle.notify_scroll_end();
            self.finish_settle(token);
            return None;
        };

        let behavior = if animated {
            self.pending_animation = Some((current_px, target_px));
            self.sampler.start();
            ScrollBehavior::Animated {
                duration_ms: self.options.motion.duration_ms,
                easing: self.options.motion.easing,
            }
        } else {
            self.write_px(target_px);
            self.settle.notify_scroll_end();
            self.finish_settle(token);
            ScrollBehavior::Instant
        };

        Some(ScrollCommand {
            token,
            target_position,
            target_px,
            behavior,
        })
    }

    /// Motion without a target, e.g. a native wheel or trackpad scroll.
    fn begin_free_settle(&mut self, px: f32) {
        let token = self.store.state().motion.token + 1;
        self.store.dispatch(Action::start_motion(token, false));
        self.target_position = None;
        self.motion_reason = AnnounceReason::Scroll;
        self.settle.start(token, px);
        self.sampler.start();
    }

    /// Commit the slide the track rested on for `token`.
    fn finish_settle(&mut self, token: u64) -> Option<LogicalIndex> {
        let state = self.store.snapshot();
        let slides = self.geometry.mounted_slides();
        let decision = resolve_commit(&CommitInput {
            slides: &slides,
            viewport_main: self.geometry.viewport_main(),
            scroll_px: self.current_px(),
            align: self.options.layout.align,
            baseline: self.geometry.slide_rect(self.anchor_position),
            // Explicit targets were already chosen past the threshold.
            threshold: match self.target_position {
                Some(_) => None,
                None => self.options.interaction.commit_threshold,
            },
        });
        let position = match decision {
            CommitDecision::Commit { position, .. } => position,
            CommitDecision::Hold => self.anchor_position,
            CommitDecision::Unmeasured => {
                self.target_position.unwrap_or(self.anchor_position)
            }
        };
        let index =
            logical_for_position(position, state.slide_count, state.looping);

        self.store.dispatch(
            NavigationAction::Commit {
                index,
                source: CommitSource::Settle { token },
            }
            .into(),
        );
        self.settle.clear_settled();
        self.sampler.stop();
        self.target_position = None;

        self.anchor_position = if state.looping {
            position
        } else {
            index as i64
        };
        self.refresh_window();
        // A held or same-slide settle closes the episode silently.
        if self.store.state().index == state.index {
            return None;
        }
        self.announce(self.motion_reason);
        Some(index)
    }

    fn announce(&mut self, reason: AnnounceReason) {
        let state = self.store.snapshot();
        let input = AnnounceInput {
            enabled: state.a11y.announce_enabled,
            index: state.index as i64,
            total: state.slide_count as i64,
            looping: state.looping,
        };
        let policy = self.autoplay_policy();
        let message = self
            .announcer
            .on_commit(&input, reason, &policy)
            .map(str::to_owned);
        if message.is_some() {
            self.store.dispatch(Action::announce(message));
        }
    }

    /// User-driven navigation either restarts the autoplay dwell or pauses
    /// autoplay for good.
    fn note_interaction(&mut self) {
        if !self.store.state().autoplay.enabled {
            return;
        }
        if self.options.autoplay.resume_after_interaction {
            self.restart_dwell = true;
        } else {
            self.set_gate(Gate::ManualPause, true);
        }
    }

    // -- platform inputs --------------------------------------------------

    /// Raw scroll callback. Only records the offset.
    pub fn on_scroll(&self, px: f32) {
        self.sink.write(px);
    }

    /// Native end-of-scroll signal.
    pub fn on_scroll_end(&mut self) -> Option<LogicalIndex> {
        let token = self.settle.notify_scroll_end()?;
        self.animator.cancel();
        self.pending_animation = None;
        self.finish_settle(token)
    }

    /// Low-frequency driver; call once per display refresh.
    pub fn on_frame(&mut self, now: Instant) -> FrameOutput {
        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default()
            .min(Duration::from_millis(constants::autoplay::MAX_FRAME_DELTA_MS));
        self.last_frame = Some(now);
        let before = Arc::clone(&self.store.state().virtualization);
        let mut out = FrameOutput::default();

        if self.measure.take_due() {
            self.measure_now();
        }
        out.scroll_to = self.pending_scroll.take();

        self.apply_autoplay_policy();
        if self.autoplay_running {
            match self.options.autoplay.mode {
                AutoplayMode::Step => {
                    let interval = self.store.state().autoplay.interval_ms;
                    self.ticker.start(interval, now);
                    if std::mem::take(&mut self.restart_dwell) {
                        self.ticker.restart(now);
                    }
                    if self.ticker.poll(now) && !self.settle.is_pending() {
                        out.command = self.autoplay_step();
                    }
                }
                AutoplayMode::Continuous => {
                    self.ticker.stop();
                    if let Some(px) = self.drift(dt) {
                        out.scroll_to = Some(px);
                        out.committed = self.commit_drift(px);
                    }
                }
            }
        } else {
            self.ticker.stop();
            self.restart_dwell = false;
        }

        if let Some((from, to)) = self.pending_animation.take() {
            self.animator.start(
                from,
                to,
                self.options.motion.duration_ms,
                self.options.motion.easing,
                now,
            );
        }
        if let Some(px) = self.animator.tick(now) {
            self.write_px(px);
            out.scroll_to = Some(px);
        }

        let px = self.current_px();
        if px != self.store.state().scroll_px {
            self.observe(px);
            if !self.settle.is_pending() && !self.store.state().is_dragging {
                self.begin_free_settle(px);
            }
        }

        if !self.animator.is_active()
            && let Some(token) = self.sampler.on_frame(px, &mut self.settle)
        {
            out.committed = self.finish_settle(token).or(out.committed);
        }

        out.slots_changed =
            !Arc::ptr_eq(&before, &self.store.state().virtualization);
        out
    }

    fn autoplay_step(&mut self) -> Option<ScrollCommand> {
        let state = self.store.state();
        let kind = if !state.looping
            && !can_next(state.index, state.slide_count, state.looping)
        {
            NavigationKind::GoTo(0)
        } else {
            NavigationKind::Next
        };
        log::debug!("autoplay step: {kind:?}");
        self.navigate(kind, AnnounceReason::Autoplay)
    }

    fn drift(&mut self, dt: Duration) -> Option<f32> {
        if self.settle.is_pending()
            || self.animator.is_active()
            || self.store.state().is_dragging
        {
            return None;
        }
        let delta = self.options.autoplay.continuous_px_per_s * dt.as_secs_f32();
        if delta <= 0.0 {
            return None;
        }
        let current = self.current_px();
        let mut px = current + delta;
        let state = self.store.state();
        if !state.looping {
            let last = state.slide_count.saturating_sub(1) as i64;
            if let Some(max) =
                scroll_target(&self.geometry, last, self.options.layout.align)
            {
                px = px.min(max.max(current));
            }
        }
        if px == current {
            return None;
        }
        self.write_px(px);
        Some(px)
    }

    /// Continuous autoplay commits slides as they pass the snap line.
    fn commit_drift(&mut self, px: f32) -> Option<LogicalIndex> {
        let viewport = self.geometry.viewport_main()?;
        let slides = self.geometry.mounted_slides();
        let nearest =
            nearest_slide(&slides, px, viewport, self.options.layout.align)?;
        let changed = self.store.dispatch(
            NavigationAction::Commit {
                index: nearest.logical_index,
                source: CommitSource::External,
            }
            .into(),
        );
        if !changed {
            return None;
        }
        self.anchor_position = nearest.position;
        self.refresh_window();
        Some(self.store.state().index)
    }

    pub fn on_pointer_down(&mut self, main_px: f32, now: Instant) {
        if !self.options.interaction.draggable {
            return;
        }
        let action = self.pointer.on_down();
        self.store.dispatch(action);
        self.drag.begin(main_px, now);
        self.press_interrupted =
            self.animator.is_active() || self.settle.is_pending();
        if self.press_interrupted {
            self.cancel_motion();
        }
        self.apply_autoplay_policy();
    }

    /// Returns the offset the track should follow the pointer to.
    pub fn on_pointer_move(&mut self, main_px: f32, now: Instant) -> Option<f32> {
        if !self.pointer.is_pressed() {
            return None;
        }
        let event = self.drag.update(main_px, now)?;
        let px = self.current_px() + self.drag_sign() * event.delta;
        self.write_px(px);
        Some(px)
    }

    pub fn on_pointer_up(&mut self, now: Instant) -> Option<ScrollCommand> {
        if !self.pointer.is_pressed() {
            return None;
        }
        let action = self.pointer.on_up();
        self.store.dispatch(action);
        self.apply_autoplay_policy();
        let interrupted = std::mem::take(&mut self.press_interrupted);
        match self.drag.end(now) {
            Some(event) => {
                self.note_interaction();
                self.release_drag(event)
            }
            // A tap that stopped a motion still has to land on a slide.
            None if interrupted => self.release_drag(DragEvent::at_rest()),
            None => None,
        }
    }

    /// Pointer lost mid-gesture: snap to the nearest slide without fling.
    pub fn on_pointer_cancel(&mut self) -> Option<ScrollCommand> {
        if !self.pointer.is_pressed() {
            return None;
        }
        let action = self.pointer.on_cancel();
        self.store.dispatch(action);
        self.apply_autoplay_policy();
        let was_dragging = self.drag.is_dragging();
        let interrupted = std::mem::take(&mut self.press_interrupted);
        self.drag.cancel();
        if !was_dragging && !interrupted {
            return None;
        }
        self.release_drag(DragEvent::at_rest())
    }

    fn release_drag(&mut self, event: DragEvent) -> Option<ScrollCommand> {
        let px = self.current_px();
        let Some(viewport) = self.geometry.viewport_main() else {
            self.begin_free_settle(px);
            return None;
        };
        let state = self.store.snapshot();
        let slides = self.geometry.mounted_slides();
        let baseline = self.geometry.slide_rect(self.anchor_position);
        let decision = resolve_commit(&CommitInput {
            slides: &slides,
            viewport_main: Some(viewport),
            scroll_px: px,
            align: self.options.layout.align,
            baseline,
            threshold: self.options.interaction.commit_threshold,
        });
        let mut target = match decision {
            CommitDecision::Commit { position, .. } => position,
            CommitDecision::Hold | CommitDecision::Unmeasured => {
                self.anchor_position
            }
        };

        let interaction = &self.options.interaction;
        if interaction.fling {
            let stride = baseline
                .map(|rect| rect.size + self.geometry.gap())
                .filter(|stride| *stride > 0.0)
                .unwrap_or(viewport);
            let steps =
                fling_steps(event.velocity, interaction.fling_strength, stride);
            if steps != 0 {
                log::trace!("fling {steps} slides at {}px/ms", event.velocity);
                target += self.drag_sign() as i64 * steps;
            }
        }
        if !state.looping && state.slide_count > 0 {
            target = target.clamp(0, state.slide_count as i64 - 1);
        }
        self.begin_motion(target, AnnounceReason::Pointer)
    }

    /// Pointer displacement to scroll displacement.
    fn drag_sign(&self) -> f32 {
        match (self.options.layout.axis, self.options.layout.direction) {
            (Axis::Horizontal, ReadingDirection::Rtl) => 1.0,
            _ => -1.0,
        }
    }

    pub fn on_key(
        &mut self,
        key: Key,
        target_is_editable: bool,
    ) -> Option<ScrollCommand> {
        let count = self.store.state().slide_count;
        let kind = self.keyboard.on_key(key, target_is_editable, count)?;
        self.navigate(kind, AnnounceReason::Keyboard)
    }

    pub fn on_focus(&mut self, target: FocusTarget) {
        let actions = self.focus.on_focus(target);
        if self.store.dispatch_all(actions) {
            self.refresh_window();
            self.apply_autoplay_policy();
        }
    }

    pub fn on_hover(&mut self, hovered: bool) {
        if let Some(action) = self.hover.on_hover(hovered) {
            self.store.dispatch(action);
            self.apply_autoplay_policy();
        }
    }

    pub fn on_visibility_change(&mut self, hidden: bool) {
        if let Some(action) = self.visibility.on_visibility(hidden) {
            self.store.dispatch(action);
            self.apply_autoplay_policy();
        }
    }

    /// Reduced motion also finishes any running tween immediately.
    pub fn on_reduced_motion(&mut self, prefers_reduced_motion: bool) {
        let action = ReducedMotionAdapter.on_preference(prefers_reduced_motion);
        self.store.dispatch(action);
        self.apply_autoplay_policy();
        if !prefers_reduced_motion {
            return;
        }
        let target = self
            .animator
            .target()
            .or(self.pending_animation.map(|(_, to)| to));
        if let Some(target) = target {
            self.animator.cancel();
            self.pending_animation = None;
            self.write_px(target);
            if let Some(token) = self.settle.notify_scroll_end() {
                self.finish_settle(token);
            }
        }
    }

    pub fn on_resize(&mut self) {
        if self.measure.on_resize() {
            self.measure_now();
        }
    }

    fn measure_now(&mut self) {
        if let Some(action) = measure_action(&self.geometry) {
            self.store.dispatch(action);
        }
        self.seed_track();
    }

    /// Place the track on the committed slide before anything has moved it,
    /// e.g. for a non-zero `initial_index`. Retried on measurement while the
    /// geometry is unmeasured.
    fn seed_track(&mut self) {
        if self.store.state().motion.token != 0
            || self.pointer.is_pressed()
            || self.sink.peek().is_some()
        {
            return;
        }
        let align = self.options.layout.align;
        let Some(px) = scroll_target(&self.geometry, self.anchor_position, align)
        else {
            return;
        };
        if px != self.current_px() {
            log::debug!("seeding track at {px}px for slide {}", self.index());
            self.write_px(px);
            self.pending_scroll = Some(px);
        }
    }

    // -- host commands ----------------------------------------------------

    pub fn set_gate(&mut self, gate: Gate, value: bool) {
        self.store.dispatch(Action::set_gate(gate, value));
        self.apply_autoplay_policy();
    }

    pub fn set_autoplay_enabled(&mut self, enabled: bool) {
        self.store.dispatch(Action::set_autoplay_enabled(enabled));
        self.apply_autoplay_policy();
    }

    pub fn set_autoplay_interval(&mut self, interval_ms: f64) -> Result<()> {
        let action = Action::set_autoplay_interval(interval_ms)?;
        self.store.dispatch(action);
        self.apply_autoplay_policy();
        Ok(())
    }

    /// Baseline politeness used while autoplay is not running.
    pub fn set_live_mode(&mut self, mode: LiveMode) {
        self.options.a11y.live_mode = mode;
        self.apply_autoplay_policy();
    }

    pub fn set_announce_enabled(&mut self, enabled: bool) {
        self.store.dispatch(Action::set_announce_enabled(enabled));
    }

    /// Replace the slide count. Any motion in flight is dropped.
    pub fn set_slide_count(&mut self, count: usize) {
        self.cancel_motion();
        self.store.dispatch(NavigationAction::SetSlideCount(count).into());
        let state = self.store.state();
        self.anchor_position = if state.looping {
            nearest_position(state.index, count, self.anchor_position)
        } else {
            state.index as i64
        };
        self.refresh_window();
        self.measure.schedule();
        self.apply_autoplay_policy();
    }

    /// Stop timers and sampling and drop any pending motion.
    pub fn reset(&mut self) {
        self.ticker.stop();
        self.restart_dwell = false;
        self.drag.cancel();
        self.cancel_motion();
        self.last_frame = None;
    }

    // -- internals --------------------------------------------------------

    fn cancel_motion(&mut self) {
        self.animator.cancel();
        self.pending_animation = None;
        self.settle.reset();
        self.sampler.stop();
        self.target_position = None;
        self.store.dispatch(Action::cancel_motion());
    }

    fn current_px(&self) -> f32 {
        self.sink
            .peek()
            .unwrap_or_else(|| self.store.state().scroll_px)
    }

    /// Offset moved by the engine itself (tween, drag, drift, jump).
    fn write_px(&mut self, px: f32) {
        self.sink.write(px);
        self.observe(px);
    }

    fn observe(&mut self, px: f32) {
        match Action::observe_scroll(px) {
            Ok(action) => {
                self.store.dispatch(action);
            }
            Err(err) => log::warn!("ignoring scroll sample: {err}"),
        }
    }

    fn refresh_window(&mut self) {
        let state = self.store.snapshot();
        let anchors: Vec<i64> = [Some(self.anchor_position), self.target_position]
            .into_iter()
            .flatten()
            .collect();
        let window = compute_window(&WindowInput {
            count: state.slide_count,
            looping: state.looping,
            center: self.anchor_position,
            window_size: state.virtualization.window_size,
            overscan: state.virtualization.overscan,
            pinned: &state.virtualization.pinned,
            anchors: &anchors,
        });
        let bucket = window
            .as_ref()
            .and_then(|w| seam_bucket(w.start, state.slide_count));
        if self.store.dispatch(Action::set_window(window, bucket)) {
            let slots = self.render_slots();
            self.geometry.sync_mounted(&slots);
        }
    }

    fn apply_autoplay_policy(&mut self) {
        let evaluation = self.autoplay_evaluation();
        if evaluation.can_run != self.autoplay_running {
            if evaluation.can_run {
                log::debug!("autoplay running");
            } else {
                log::debug!("autoplay paused: {:?}", evaluation.blocked);
                self.ticker.stop();
            }
            self.autoplay_running = evaluation.can_run;
        }
        let policy = self.autoplay_policy();
        self.announcer.apply_policy(&policy);
        if self.store.state().a11y.live_mode != policy.live_mode {
            self.store.dispatch(Action::set_live_mode(policy.live_mode));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autoplay::BlockReason;
    use crate::geometry::TrackLayout;
    use crate::options::CommitThreshold;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn engine(options: CarouselOptions) -> CarouselEngine<TrackLayout> {
        let track = TrackLayout::uniform(options.slide_count, 100.0, 0.0)
            .unwrap()
            .looping(options.layout.looping)
            .with_viewport(100.0);
        CarouselEngine::new(options, track).unwrap()
    }

    fn instant(count: usize) -> CarouselOptions {
        let mut options = CarouselOptions::with_slides(count);
        options.motion.disabled = true;
        options
    }

    fn run_until_commit(
        engine: &mut CarouselEngine<TrackLayout>,
        t0: Instant,
    ) -> Option<LogicalIndex> {
        (1..=40).find_map(|i| engine.on_frame(t0 + ms(16 * i)).committed)
    }

    #[test]
    fn instant_navigation_commits_immediately() {
        let mut engine = engine(instant(5));
        let command = engine.next().unwrap();
        assert_eq!(command.behavior, ScrollBehavior::Instant);
        assert_eq!(command.target_px, 100.0);
        assert_eq!(engine.index(), 1);
        assert_eq!(engine.state().motion.pending_token, None);
        assert_eq!(engine.announcer().message(), Some("Slide 2 of 5"));
        assert_eq!(
            engine.state().a11y.last_announcement.as_deref(),
            Some("Slide 2 of 5")
        );
    }

    #[test]
    fn animated_navigation_commits_after_settling() {
        let mut engine = engine(CarouselOptions::with_slides(5));
        let command = engine.next().unwrap();
        assert!(matches!(command.behavior, ScrollBehavior::Animated { .. }));
        assert_eq!(engine.index(), 0);
        assert!(engine.affordances().is_animating);

        let t0 = Instant::now();
        assert_eq!(run_until_commit(&mut engine, t0), Some(1));
        assert_eq!(engine.state().scroll_px, 100.0);
        assert!(!engine.affordances().is_animating);
    }

    #[test]
    fn later_navigation_supersedes_pending_motion() {
        let mut engine = engine(CarouselOptions::with_slides(5));
        let first = engine.next().unwrap();
        let second = engine.next().unwrap();
        assert!(second.token > first.token);
        assert_eq!(second.target_position, 2);

        assert_eq!(run_until_commit(&mut engine, Instant::now()), Some(2));
        assert_eq!(engine.state().motion.token, second.token);
    }

    #[test]
    fn loop_wraps_past_the_last_slide() {
        let mut engine = engine(instant(3).looping(true));
        engine.next();
        engine.next();
        let command = engine.next().unwrap();
        assert_eq!(command.target_position, 3);
        assert_eq!(engine.index(), 0);
        let epoch = engine.state().virtualization.epoch;
        assert!(engine.render_slots().iter().all(|s| s.key.epoch == epoch));
        assert!(engine.affordances().can_prev);
    }

    #[test]
    fn edges_stop_without_loop() {
        let mut engine = engine(instant(2));
        assert!(engine.prev().is_none());
        assert!(engine.next().is_some());
        assert_eq!(engine.index(), 1);
        assert!(engine.next().is_none());
        assert!(!engine.affordances().can_next);
        assert!(engine.affordances().can_prev);
    }

    #[test]
    fn unmeasured_geometry_commits_without_scrolling() {
        let track = TrackLayout::uniform(4, 100.0, 0.0).unwrap();
        let mut engine =
            CarouselEngine::new(CarouselOptions::with_slides(4), track).unwrap();
        assert!(engine.goto(2).is_none());
        assert_eq!(engine.index(), 2);
    }

    #[test]
    fn step_autoplay_advances_and_rewinds() {
        let mut options = instant(2);
        options.autoplay.enabled = true;
        options.autoplay.interval_ms = 1_000;
        let mut engine = engine(options);
        let t0 = Instant::now();

        assert!(engine.on_frame(t0).command.is_none());
        assert_eq!(engine.state().a11y.live_mode, LiveMode::Off);
        assert!(engine.on_frame(t0 + ms(1_000)).command.is_some());
        assert_eq!(engine.index(), 1);
        assert_eq!(engine.announcer().message(), None);
        engine.on_frame(t0 + ms(2_000));
        assert_eq!(engine.index(), 0);
    }

    #[test]
    fn hover_blocks_autoplay() {
        let mut options = instant(4);
        options.autoplay.enabled = true;
        options.autoplay.interval_ms = 1_000;
        let mut engine = engine(options);
        let t0 = Instant::now();
        engine.on_frame(t0);
        engine.on_hover(true);

        assert!(engine.on_frame(t0 + ms(1_000)).command.is_none());
        assert_eq!(engine.index(), 0);
        assert_eq!(
            engine.autoplay_evaluation().blocked,
            vec![BlockReason::Gate(Gate::Hover)]
        );
        assert_eq!(engine.state().a11y.live_mode, LiveMode::Polite);
    }

    #[test]
    fn interaction_can_pause_autoplay_for_good() {
        let mut options = instant(4);
        options.autoplay.enabled = true;
        options.autoplay.resume_after_interaction = false;
        let mut engine = engine(options);
        engine.next();
        assert!(engine.gates().manual_pause);
        assert!(!engine.autoplay().is_playing());
    }

    #[test]
    fn drag_release_snaps_to_nearest_slide() {
        let mut engine = engine(instant(5));
        let t0 = Instant::now();
        engine.on_pointer_down(500.0, t0);
        assert!(engine.affordances().is_dragging);
        assert_eq!(engine.on_pointer_move(430.0, t0 + ms(50)), Some(70.0));

        let command = engine.on_pointer_up(t0 + ms(300)).unwrap();
        assert_eq!(command.target_position, 1);
        assert_eq!(engine.index(), 1);
        assert!(!engine.affordances().is_dragging);
    }

    #[test]
    fn fast_release_flings_several_slides() {
        let mut engine = engine(instant(5));
        let t0 = Instant::now();
        engine.on_pointer_down(500.0, t0);
        engine.on_pointer_move(430.0, t0 + ms(50));
        let command = engine.on_pointer_up(t0 + ms(60)).unwrap();
        assert_eq!(command.target_position, 4);
        assert_eq!(engine.index(), 4);
    }

    #[test]
    fn tap_during_animation_still_lands_on_a_slide() {
        let mut engine = engine(CarouselOptions::with_slides(5));
        engine.next().unwrap();
        let t0 = Instant::now();
        engine.on_frame(t0);
        engine.on_frame(t0 + ms(100));
        let mid = engine.state().scroll_px;
        assert!(mid > 0.0 && mid < 100.0, "{mid}");

        engine.on_pointer_down(500.0, t0 + ms(110));
        assert!(engine.on_pointer_up(t0 + ms(130)).is_some());
        for i in 0..100 {
            engine.on_frame(t0 + ms(150 + 16 * i));
        }

        let state = engine.state();
        assert_eq!(state.motion.pending_token, None);
        assert!(!state.motion.is_animating);
        assert_eq!(state.scroll_px, engine.index() as f32 * 100.0);
    }

    #[test]
    fn initial_index_places_the_track() {
        let mut engine =
            engine(CarouselOptions::with_slides(5).initial_index(2));
        assert_eq!(engine.state().scroll_px, 200.0);
        let t0 = Instant::now();
        assert_eq!(engine.on_frame(t0).scroll_to, Some(200.0));

        let command = engine.next().unwrap();
        assert_eq!(command.target_px, 300.0);
        let first = engine.on_frame(t0 + ms(16)).scroll_to.unwrap();
        assert!((200.0..=300.0).contains(&first), "{first}");
        assert_eq!(run_until_commit(&mut engine, t0 + ms(16)), Some(3));
    }

    #[test]
    fn initial_index_waits_for_measurement() {
        let track = TrackLayout::uniform(5, 100.0, 0.0).unwrap();
        let options = CarouselOptions::with_slides(5).initial_index(2);
        let mut engine = CarouselEngine::new(options, track).unwrap();
        assert_eq!(engine.state().scroll_px, 0.0);

        engine.geometry_mut().set_viewport(Some(100.0));
        let out = engine.on_frame(Instant::now());
        assert_eq!(out.scroll_to, Some(200.0));
        assert_eq!(out.committed, None);
        assert_eq!(engine.state().motion.pending_token, None);
    }

    #[test]
    fn held_settle_is_not_announced() {
        let mut options = CarouselOptions::with_slides(5);
        options.interaction.commit_threshold = Some(CommitThreshold::Px(60.0));
        let mut engine = engine(options);
        engine.on_scroll(30.0);

        let t0 = Instant::now();
        let commits: Vec<_> = (1..=40)
            .filter_map(|i| engine.on_frame(t0 + ms(16 * i)).committed)
            .collect();
        assert!(commits.is_empty(), "{commits:?}");
        assert_eq!(engine.index(), 0);
        assert_eq!(engine.announcer().message(), None);
        assert_eq!(engine.state().motion.pending_token, None);
    }

    #[test]
    fn free_scroll_commits_once_stable() {
        let mut engine = engine(CarouselOptions::with_slides(5));
        engine.on_scroll(205.0);
        assert_eq!(run_until_commit(&mut engine, Instant::now()), Some(2));
        assert_eq!(engine.announcer().message(), Some("Slide 3 of 5"));
    }

    #[test]
    fn keys_in_editable_targets_are_ignored() {
        let mut engine = engine(instant(5));
        assert!(engine.on_key(Key::ArrowRight, true).is_none());
        assert!(engine.on_key(Key::End, false).is_some());
        assert_eq!(engine.index(), 4);
        assert_eq!(engine.announcer().message(), Some("Carousel end"));
    }

    #[test]
    fn reduced_motion_jumps_instead_of_animating() {
        let mut engine = engine(CarouselOptions::with_slides(5));
        engine.on_reduced_motion(true);
        let command = engine.next().unwrap();
        assert_eq!(command.behavior, ScrollBehavior::Instant);
        assert_eq!(engine.index(), 1);
    }

    #[test]
    fn focus_pins_the_focused_slide() {
        let mut engine = engine(CarouselOptions::with_slides(10));
        engine.on_focus(FocusTarget::Slide(8));
        assert!(engine.gates().focus_within);
        assert!(engine.render_slots().iter().any(|s| s.logical_index == 8));
        engine.on_focus(FocusTarget::Outside);
        assert!(!engine.gates().focus_within);
        assert!(!engine.render_slots().iter().any(|s| s.logical_index == 8));
    }

    #[test]
    fn shrinking_the_count_clamps_the_index() {
        let mut engine = engine(instant(5));
        engine.last();
        engine.set_slide_count(3);
        assert_eq!(engine.index(), 2);
        assert!(engine.render_slots().iter().all(|s| s.logical_index < 3));
    }
}
