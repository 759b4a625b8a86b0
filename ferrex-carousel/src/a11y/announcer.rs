use super::{AnnounceInput, AnnounceReason, announcement};
use crate::autoplay::AutoplayPolicy;
use crate::types::LiveMode;

/// Current live-region message and politeness for the host to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcer {
    edge_prefix: String,
    message: Option<String>,
    politeness: LiveMode,
}

impl Announcer {
    pub fn new(edge_prefix: impl Into<String>, politeness: LiveMode) -> Self {
        Self {
            edge_prefix: edge_prefix.into(),
            message: None,
            politeness,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn politeness(&self) -> LiveMode {
        self.politeness
    }

    pub fn apply_policy(&mut self, policy: &AutoplayPolicy) {
        self.politeness = policy.live_mode;
    }

    /// Recompute the message after a commit. Returns the new message when
    /// one was produced.
    pub fn on_commit(
        &mut self,
        input: &AnnounceInput,
        reason: AnnounceReason,
        policy: &AutoplayPolicy,
    ) -> Option<&str> {
        self.apply_policy(policy);
        if policy.suppress_announcements {
            return None;
        }
        let text = announcement(input, reason, &self.edge_prefix)?;
        self.message = Some(text);
        self.message.as_deref()
    }
}
