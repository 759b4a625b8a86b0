use crate::math::floor_div;

/// Loop cycle the window start falls in. `None` without slides.
pub fn seam_bucket(start: i64, count: usize) -> Option<i64> {
    (count > 0).then(|| floor_div(start, count as i64))
}

/// Epoch after moving from `previous` to `next` bucket.
///
/// Bumps by one only under loop and only when both buckets are known and
/// differ. The first computation never bumps.
pub fn next_epoch(
    epoch: u64,
    previous: Option<i64>,
    next: Option<i64>,
    looping: bool,
) -> u64 {
    match (looping, previous, next) {
        (true, Some(prev), Some(next)) if prev != next => {
            log::debug!("window crossed seam {prev} -> {next}, epoch {}", epoch + 1);
            epoch + 1
        }
        _ => epoch,
    }
}
