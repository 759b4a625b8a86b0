//! Accessibility announcements
//!
//! Text is a pure function of the committed index and layout; politeness
//! comes from the autoplay policy so a running autoplay never floods
//! assistive technology.

mod announcer;

pub use announcer::Announcer;

/// What caused the commit being announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnounceReason {
    Navigation,
    Keyboard,
    Pointer,
    Scroll,
    Autoplay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnounceInput {
    pub enabled: bool,
    pub index: i64,
    pub total: i64,
    pub looping: bool,
}

/// Announcement text, or `None` when disabled or caused by autoplay.
///
/// Without loop the first and last slides announce as edges using
/// `edge_prefix`; everything else is "Slide N of M".
pub fn announcement(
    input: &AnnounceInput,
    reason: AnnounceReason,
    edge_prefix: &str,
) -> Option<String> {
    if !input.enabled || reason == AnnounceReason::Autoplay {
        return None;
    }
    let total = input.total.max(1);
    let index = input.index.max(0);
    if !input.looping {
        if index == 0 {
            return Some(format!("{edge_prefix} start"));
        }
        if index == total - 1 {
            return Some(format!("{edge_prefix} end"));
        }
    }
    Some(format!("Slide {} of {total}", index + 1))
}
