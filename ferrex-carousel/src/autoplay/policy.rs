use super::gates::GateEvaluation;
use crate::types::LiveMode;

/// Live-region posture derived from the autoplay run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayPolicy {
    pub live_mode: LiveMode,
    pub suppress_announcements: bool,
}

/// While autoplay runs the live region goes quiet. Otherwise the caller's
/// baseline politeness applies and announcements follow `wanted`.
pub fn policy(
    evaluation: &GateEvaluation,
    announcements_wanted: bool,
    baseline: LiveMode,
) -> AutoplayPolicy {
    if evaluation.can_run {
        AutoplayPolicy {
            live_mode: LiveMode::Off,
            suppress_announcements: true,
        }
    } else {
        AutoplayPolicy {
            live_mode: baseline,
            suppress_announcements: !announcements_wanted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autoplay::BlockReason;

    #[test]
    fn running_autoplay_silences_the_live_region() {
        let eval = GateEvaluation {
            can_run: true,
            blocked: vec![],
        };
        let p = policy(&eval, true, LiveMode::Assertive);
        assert_eq!(p.live_mode, LiveMode::Off);
        assert!(p.suppress_announcements);
    }

    #[test]
    fn blocked_autoplay_restores_baseline() {
        let eval = GateEvaluation {
            can_run: false,
            blocked: vec![BlockReason::Disabled],
        };
        let p = policy(&eval, true, LiveMode::Polite);
        assert_eq!(p.live_mode, LiveMode::Polite);
        assert!(!p.suppress_announcements);
        assert!(policy(&eval, false, LiveMode::Polite).suppress_announcements);
    }
}
