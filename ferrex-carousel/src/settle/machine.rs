use crate::constants::settle;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleConfig {
    /// Samples closer than this (px) count as stable.
    pub epsilon_px: f32,
    /// Consecutive stable samples before settling.
    pub stable_frames: u32,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            epsilon_px: settle::EPSILON_PX,
            stable_frames: settle::STABLE_FRAMES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlePhase {
    Idle,
    Pending { token: u64 },
    Settled { token: u64 },
}

/// Token-scoped settle detector.
///
/// Callers commit once per settled token and then call
/// [`clear_settled`](Self::clear_settled). The machine itself does not guard
/// against a second commit.
#[derive(Debug, Clone, Default)]
pub struct SettleMachine {
    config: SettleConfig,
    pending_token: Option<u64>,
    last_px: Option<f32>,
    stable_frames: u32,
    settled_token: Option<u64>,
}

impl SettleMachine {
    pub fn new(config: SettleConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> SettleConfig {
        self.config
    }

    pub fn phase(&self) -> SettlePhase {
        match (self.pending_token, self.settled_token) {
            (_, Some(token)) => SettlePhase::Settled { token },
            (Some(token), None) => SettlePhase::Pending { token },
            (None, None) => SettlePhase::Idle,
        }
    }

    pub fn pending_token(&self) -> Option<u64> {
        self.pending_token
    }

    pub fn settled_token(&self) -> Option<u64> {
        self.settled_token
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase(), SettlePhase::Pending { .. })
    }

    /// Arm for `token`, superseding anything pending or settled.
    pub fn start(&mut self, token: u64, px: f32) {
        self.pending_token = Some(token);
        self.last_px = Some(px);
        self.stable_frames = 0;
        self.settled_token = None;
    }

    /// Feed one low-frequency sample. Returns the token if this sample
    /// settled it.
    pub fn sample(&mut self, px: f32) -> Option<u64> {
        let token = self.pending_token?;
        if self.settled_token.is_some() {
            return None;
        }
        let stable = self
            .last_px
            .is_some_and(|last| (px - last).abs() <= self.config.epsilon_px);
        self.last_px = Some(px);
        if stable {
            self.stable_frames += 1;
        } else {
            self.stable_frames = 0;
        }
        if self.stable_frames >= self.config.stable_frames {
            self.settled_token = Some(token);
            log::debug!("settled token {token} at {px}px");
            return Some(token);
        }
        None
    }

    /// Native end-of-scroll: settle the pending token immediately.
    pub fn notify_scroll_end(&mut self) -> Option<u64> {
        let token = self.pending_token?;
        if self.settled_token.is_some() {
            return None;
        }
        self.settled_token = Some(token);
        log::debug!("settled token {token} on scroll end");
        Some(token)
    }

    /// Back to idle after the caller committed the settled token.
    pub fn clear_settled(&mut self) {
        if self.settled_token.take().is_some() {
            self.pending_token = None;
            self.last_px = None;
            self.stable_frames = 0;
        }
    }

    pub fn reset(&mut self) {
        self.pending_token = None;
        self.last_px = None;
        self.stable_frames = 0;
        self.settled_token = None;
    }
}
