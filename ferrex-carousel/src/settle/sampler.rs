use super::machine::SettleMachine;

/// Low-frequency driver that feeds the settle machine once per frame.
///
/// Runs only while a motion is pending so idle carousels cost nothing per
/// frame.
#[derive(Debug, Clone, Default)]
pub struct FrameSampler {
    running: bool,
    samples: u64,
}

impl FrameSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if !self.running {
            log::trace!("frame sampler started");
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            log::trace!("frame sampler stopped after {} samples", self.samples);
        }
        self.running = false;
        self.samples = 0;
    }

    /// Sample `px` into `machine` if running. Stops itself once the machine
    /// is no longer pending.
    pub fn on_frame(
        &mut self,
        px: f32,
        machine: &mut SettleMachine,
    ) -> Option<u64> {
        if !self.running {
            return None;
        }
        self.samples += 1;
        let settled = machine.sample(px);
        if !machine.is_pending() {
            self.stop();
        }
        settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settle::SettleConfig;

    #[test]
    fn stops_after_settling() {
        let mut machine = SettleMachine::new(SettleConfig {
            epsilon_px: 0.5,
            stable_frames: 1,
        });
        let mut sampler = FrameSampler::new();
        assert_eq!(sampler.on_frame(0.0, &mut machine), None);

        machine.start(1, 0.0);
        sampler.start();
        assert_eq!(sampler.on_frame(0.0, &mut machine), Some(1));
        assert!(!sampler.is_running());
    }

    #[test]
    fn idle_sampler_leaves_machine_alone() {
        let mut machine = SettleMachine::default();
        machine.start(3, 0.0);
        let mut sampler = FrameSampler::new();
        for _ in 0..10 {
            assert_eq!(sampler.on_frame(0.0, &mut machine), None);
        }
        assert!(machine.is_pending());
    }
}
