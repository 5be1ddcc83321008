//! Timing table - base period (cyclic) or duration (transitional) per action

use serde::{Deserialize, Serialize};

use pointlight_core::{ActionKind, MotionError, MotionResult};

/// Base timing in seconds, before tempo modulation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TimingConfig {
    /// Full gait cycle (two steps)
    pub walking: f64,
    pub running: f64,
    /// One jump, crouch to crouch
    pub jumping_up: f64,
    pub jumping_forward: f64,
    /// Lean down and back up
    pub bowing: f64,
    pub sitting_down: f64,
    pub lying_down: f64,
    /// One full turn (or the half turn, when configured)
    pub turning_around: f64,
    /// Two waves of the forearm
    pub waving_a_hand: f64,
    /// One complete roll
    pub forward_rolling: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            walking: 1.0,
            running: 0.625,
            jumping_up: 1.0,
            jumping_forward: 1.25,
            bowing: 3.0,
            sitting_down: 2.0,
            lying_down: 3.0,
            turning_around: 2.0,
            waving_a_hand: 0.75,
            forward_rolling: 2.0,
        }
    }
}

impl TimingConfig {
    /// Base period or duration of an action, in seconds
    pub fn seconds(&self, kind: ActionKind) -> f64 {
        match kind {
            ActionKind::Walking => self.walking,
            ActionKind::Running => self.running,
            ActionKind::JumpingUp => self.jumping_up,
            ActionKind::JumpingForward => self.jumping_forward,
            ActionKind::Bowing => self.bowing,
            ActionKind::SittingDown => self.sitting_down,
            ActionKind::LyingDown => self.lying_down,
            ActionKind::TurningAround => self.turning_around,
            ActionKind::WavingAHand => self.waving_a_hand,
            ActionKind::ForwardRolling => self.forward_rolling,
        }
    }

    /// Every entry must be finite and strictly positive
    pub fn validate(&self) -> MotionResult<()> {
        for kind in ActionKind::ALL {
            let secs = self.seconds(kind);
            if !secs.is_finite() || secs <= 0.0 {
                return Err(MotionError::InvalidConfig(format!(
                    "timing for {} must be a positive number of seconds, got {}",
                    kind, secs
                )));
            }
        }
        tracing::debug!("timing table validated");
        Ok(())
    }
}
