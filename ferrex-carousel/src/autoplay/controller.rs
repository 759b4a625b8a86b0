use super::gates::GateEvaluation;
use crate::engine::CarouselEngine;
use crate::geometry::SlideGeometry;
use crate::store::GateSet;
use crate::types::Gate;

/// Autoplay view over an engine.
#[derive(Debug)]
pub struct AutoplayController<'a, G: SlideGeometry> {
    engine: &'a mut CarouselEngine<G>,
}

impl<'a, G: SlideGeometry> AutoplayController<'a, G> {
    pub(crate) fn new(engine: &'a mut CarouselEngine<G>) -> Self {
        Self { engine }
    }

    pub fn enabled(&self) -> bool {
        self.engine.state().autoplay.enabled
    }

    /// Whether autoplay would advance right now.
    pub fn is_playing(&self) -> bool {
        self.engine.autoplay_evaluation().can_run
    }

    pub fn evaluation(&self) -> GateEvaluation {
        self.engine.autoplay_evaluation()
    }

    pub fn gates(&self) -> GateSet {
        self.engine.gates()
    }

    pub fn set_gate(&mut self, gate: Gate, value: bool) {
        self.engine.set_gate(gate, value);
    }

    /// Play/pause controls. `None` unless autoplay is enabled.
    pub fn playback(&mut self) -> Option<PlaybackControls<'_, G>> {
        if !self.enabled() {
            return None;
        }
        Some(PlaybackControls {
            engine: &mut *self.engine,
        })
    }
}

/// User-facing play/pause, backed by the manual-pause gate.
#[derive(Debug)]
pub struct PlaybackControls<'a, G: SlideGeometry> {
    engine: &'a mut CarouselEngine<G>,
}

impl<G: SlideGeometry> PlaybackControls<'_, G> {
    pub fn is_paused(&self) -> bool {
        self.engine.gates().manual_pause
    }

    pub fn play(&mut self) {
        self.engine.set_gate(Gate::ManualPause, false);
    }

    pub fn pause(&mut self) {
        self.engine.set_gate(Gate::ManualPause, true);
    }

    pub fn toggle(&mut self) {
        let paused = self.is_paused();
        self.engine.set_gate(Gate::ManualPause, !paused);
    }
}
