use crate::actions::Action;
use crate::geometry::SlideGeometry;

/// Coalesces resize notifications into at most one measurement per frame.
#[derive(Debug, Clone)]
pub struct MeasureScheduler {
    observe: bool,
    next_frame: bool,
    pending: bool,
}

impl MeasureScheduler {
    pub fn new(observe_resize: bool, remeasure_next_frame: bool) -> Self {
        Self {
            observe: observe_resize,
            next_frame: remeasure_next_frame,
            pending: false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record a size change. Returns `true` when the caller should measure
    /// right away instead of waiting for the next frame.
    pub fn on_resize(&mut self) -> bool {
        if !self.observe {
            return false;
        }
        if self.next_frame {
            self.pending = true;
            false
        } else {
            true
        }
    }

    /// Ask for a measurement on the next frame regardless of coalescing.
    pub fn schedule(&mut self) {
        self.pending = true;
    }

    /// Consume the pending flag on a frame.
    pub fn take_due(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

/// Flush action for the current geometry. Malformed readings are dropped.
pub fn measure_action<G: SlideGeometry + ?Sized>(geometry: &G) -> Option<Action> {
    let sizes = geometry
        .mounted_slides()
        .into_iter()
        .map(|rect| (rect.logical_index as i64, rect.size));
    match Action::flush_measure(geometry.viewport_main(), geometry.gap(), sizes)
    {
        Ok(action) => Some(action),
        Err(err) => {
            log::warn!("dropping measurement: {err}");
            None
        }
    }
}
