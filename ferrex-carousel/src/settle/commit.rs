use crate::geometry::SlideRect;
use crate::options::CommitThreshold;
use crate::types::{Align, LogicalIndex};

/// Geometry read at a settle boundary.
#[derive(Debug, Clone, Copy)]
pub struct CommitInput<'a> {
    pub slides: &'a [SlideRect],
    pub viewport_main: Option<f32>,
    pub scroll_px: f32,
    pub align: Align,
    /// Rect of the previously committed position.
    pub baseline: Option<SlideRect>,
    pub threshold: Option<CommitThreshold>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitDecision {
    Commit {
        position: i64,
        logical_index: LogicalIndex,
    },
    /// Keep the baseline; displacement did not exceed the threshold.
    Hold,
    /// Nothing measured to decide from.
    Unmeasured,
}

/// Mounted slide whose alignment point is closest to the snap line.
pub fn nearest_slide(
    slides: &[SlideRect],
    scroll_px: f32,
    viewport_main: f32,
    align: Align,
) -> Option<SlideRect> {
    let snap_line = align.point_in(viewport_main);
    slides
        .iter()
        .map(|rect| {
            let distance =
                ((rect.align_point(align) - scroll_px) - snap_line).abs();
            (distance, rect)
        })
        .filter(|(distance, _)| distance.is_finite())
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, rect)| *rect)
}

pub fn resolve_commit(input: &CommitInput<'_>) -> CommitDecision {
    let Some(viewport) = input.viewport_main else {
        return CommitDecision::Unmeasured;
    };
    let Some(candidate) =
        nearest_slide(input.slides, input.scroll_px, viewport, input.align)
    else {
        return CommitDecision::Unmeasured;
    };

    if let (Some(threshold), Some(baseline)) = (input.threshold, input.baseline)
        && candidate.position != baseline.position
    {
        let baseline_snap = baseline.snap_offset(input.align, viewport);
        let candidate_snap = candidate.snap_offset(input.align, viewport);
        let displacement = (input.scroll_px - baseline_snap).abs();
        let required = threshold.resolve(
            viewport,
            baseline.size,
            candidate_snap - baseline_snap,
        );
        if displacement <= required {
            log::trace!(
                "holding position {}: moved {displacement}px, need > {required}px",
                baseline.position
            );
            return CommitDecision::Hold;
        }
    }

    CommitDecision::Commit {
        position: candidate.position,
        logical_index: candidate.logical_index,
    }
}
