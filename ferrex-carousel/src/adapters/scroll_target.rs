use crate::geometry::SlideGeometry;
use crate::types::Align;

/// Scroll offset that puts `position`'s alignment point on the snap line.
/// `None` until both the viewport and the slide can be measured.
pub fn scroll_target<G: SlideGeometry + ?Sized>(
    geometry: &G,
    position: i64,
    align: Align,
) -> Option<f32> {
    let viewport = geometry.viewport_main()?;
    let rect = geometry.slide_rect(position)?;
    let target = rect.snap_offset(align, viewport);
    target.is_finite().then_some(target)
}
