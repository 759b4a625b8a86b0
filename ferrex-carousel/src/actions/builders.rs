//! Validating constructors for actions whose payloads can be malformed

use super::validate;
use super::{
    A11yAction, Action, GateAction, MeasureAction, MeasureSnapshot,
    MotionAction, NavigationAction, VirtualAction,
};
use crate::error::Result;
use crate::types::{CommitSource, Gate, LiveMode, NavigationKind};
use crate::virtualization::VirtualWindow;

impl Action {
    pub fn observe_scroll(px: f32) -> Result<Self> {
        validate::finite("scroll_px", px as f64)?;
        Ok(MotionAction::ObserveScroll(px).into())
    }

    /// Measurement flush. Sizes must be finite; negative sizes are clamped
    /// to zero by the reducer.
    pub fn flush_measure<I>(
        viewport_main: Option<f32>,
        gap: f32,
        slide_sizes: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, f32)>,
    {
        if let Some(v) = viewport_main {
            validate::finite("viewport_main", v as f64)?;
        }
        validate::finite("gap", gap as f64)?;
        let slide_sizes = slide_sizes
            .into_iter()
            .map(|(index, size)| {
                let index = validate::index("slide_index", index)?;
                validate::finite("slide_size", size as f64)?;
                Ok((index, size))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(MeasureAction::Flush(MeasureSnapshot {
            viewport_main,
            gap,
            slide_sizes,
        })
        .into())
    }

    pub fn request_next() -> Self {
        NavigationAction::Request(NavigationKind::Next).into()
    }

    pub fn request_prev() -> Self {
        NavigationAction::Request(NavigationKind::Prev).into()
    }

    pub fn request_goto(index: i64) -> Result<Self> {
        let index = validate::index("goto_index", index)?;
        Ok(NavigationAction::Request(NavigationKind::GoTo(index)).into())
    }

    pub fn commit_index(index: i64, source: CommitSource) -> Result<Self> {
        let index = validate::index("commit_index", index)?;
        Ok(NavigationAction::Commit { index, source }.into())
    }

    pub fn set_slide_count(count: i64) -> Result<Self> {
        let count = validate::index("slide_count", count)?;
        Ok(NavigationAction::SetSlideCount(count).into())
    }

    pub fn start_motion(token: u64, animated: bool) -> Self {
        MotionAction::Start { token, animated }.into()
    }

    pub fn cancel_motion() -> Self {
        MotionAction::Cancel.into()
    }

    pub fn configure_window(window_size: i64, overscan: i64) -> Result<Self> {
        let window_size = validate::window_size(window_size)?;
        let overscan = validate::index("overscan", overscan)?;
        Ok(VirtualAction::Configure {
            window_size,
            overscan,
        }
        .into())
    }

    pub fn set_window(
        window: Option<VirtualWindow>,
        seam_bucket: Option<i64>,
    ) -> Self {
        VirtualAction::SetWindow {
            window,
            seam_bucket,
        }
        .into()
    }

    pub fn pin(index: i64) -> Result<Self> {
        let index = validate::index("pin_index", index)?;
        Ok(VirtualAction::Pin(index).into())
    }

    pub fn unpin(index: i64) -> Result<Self> {
        let index = validate::index("pin_index", index)?;
        Ok(VirtualAction::Unpin(index).into())
    }

    pub fn clear_pins() -> Self {
        VirtualAction::ClearPins.into()
    }

    pub fn set_gate(gate: Gate, value: bool) -> Self {
        GateAction::Set { gate, value }.into()
    }

    pub fn set_autoplay_enabled(enabled: bool) -> Self {
        GateAction::SetAutoplayEnabled(enabled).into()
    }

    /// Interval in milliseconds. Zero is accepted and blocks autoplay.
    pub fn set_autoplay_interval(ms: f64) -> Result<Self> {
        let ms = validate::non_negative("interval_ms", ms)?;
        Ok(GateAction::SetInterval(ms.round() as u64).into())
    }

    pub fn set_live_mode(mode: LiveMode) -> Self {
        A11yAction::SetLiveMode(mode).into()
    }

    pub fn set_announce_enabled(enabled: bool) -> Self {
        A11yAction::SetAnnounceEnabled(enabled).into()
    }

    pub fn announce(message: Option<String>) -> Self {
        A11yAction::Announce(message).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionCategory;
    use crate::error::CarouselError;

    #[test]
    fn malformed_numbers_fail_at_construction() {
        assert!(matches!(
            Action::observe_scroll(f32::NAN),
            Err(CarouselError::NonFinite {
                field: "scroll_px",
                ..
            })
        ));
        assert!(Action::flush_measure(Some(f32::INFINITY), 0.0, []).is_err());
        assert!(Action::flush_measure(Some(300.0), 0.0, [(0, f32::NAN)]).is_err());
        assert!(Action::set_autoplay_interval(f64::NAN).is_err());
        assert!(Action::set_autoplay_interval(-10.0).is_err());
    }

    #[test]
    fn negative_indices_fail_at_construction() {
        assert!(Action::request_goto(-1).is_err());
        assert!(Action::commit_index(-2, CommitSource::External).is_err());
        assert!(Action::pin(-1).is_err());
        assert!(Action::set_slide_count(-5).is_err());
        assert!(Action::flush_measure(None, 0.0, [(-1, 20.0)]).is_err());
    }

    #[test]
    fn negative_sizes_pass_through_for_clamping() {
        let action = Action::flush_measure(Some(320.0), 8.0, [(0, -4.0)])
            .expect("finite sizes are accepted");
        assert_eq!(action.category(), Some(ActionCategory::Measure));
    }

    #[test]
    fn zero_interval_is_accepted() {
        assert_eq!(
            Action::set_autoplay_interval(0.0),
            Ok(Action::Gate(GateAction::SetInterval(0)))
        );
    }

    #[test]
    fn tags_are_stable() {
        assert_eq!(Action::request_next().tag(), "navigation/request");
        assert_eq!(
            Action::set_gate(Gate::Hover, true).tag(),
            "gate/set"
        );
        let unknown = Action::Unrecognized("future/thing".into());
        assert_eq!(unknown.tag(), "future/thing");
        assert_eq!(unknown.category(), None);
    }
}
