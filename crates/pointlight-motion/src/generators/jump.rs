//! Jumping in place and forward
//!
//! Flight follows `parabolic_arc`; the crouch weight `1 − arc` bends the
//! knees and swings the arms back around take-off and landing.

use pointlight_core::{ActionKind, Landmark, Vec3};

use super::{apply_droop, ActionGenerator};
use crate::primitives::parabolic_arc;
use crate::{JumpParams, ModulationParams, Pose, Skeleton};

#[derive(Debug, Clone)]
pub struct JumpGenerator {
    kind: ActionKind,
    params: JumpParams,
    forward: bool,
}

impl JumpGenerator {
    pub fn up(params: JumpParams) -> Self {
        JumpGenerator {
            kind: ActionKind::JumpingUp,
            params,
            forward: false,
        }
    }

    pub fn forward(params: JumpParams) -> Self {
        JumpGenerator {
            kind: ActionKind::JumpingForward,
            params,
            forward: true,
        }
    }

    /// Vertical torso offset at the apex (phase 0.5)
    pub fn peak_height(&self, mods: &ModulationParams) -> f64 {
        self.params.height * mods.amplitude_scale
    }
}

impl ActionGenerator for JumpGenerator {
    fn kind(&self) -> ActionKind {
        self.kind
    }

    fn generate(&self, phase: f64, mods: &ModulationParams, _skeleton: &Skeleton) -> Pose {
        let p = &self.params;
        let amp = mods.amplitude_scale;

        let arc = parabolic_arc(phase);
        let rise = p.height * amp * arc;
        let dip = p.crouch_depth * amp * (1.0 - arc);
        let travel = if self.forward {
            p.forward_distance * amp * phase
        } else {
            0.0
        };

        // Arms trail the body by the phase lag
        let arm_arc = parabolic_arc((phase - mods.phase_lag).rem_euclid(1.0));
        let wrist = Vec3::new(
            0.0,
            p.arm_raise * amp * arm_arc,
            -0.5 * p.arm_raise * amp * (1.0 - arm_arc),
        );

        let mut offset = Pose::from_fn(|landmark| match landmark {
            Landmark::LeftAnkle | Landmark::RightAnkle => Vec3::new(0.0, rise, travel),
            Landmark::LeftKnee | Landmark::RightKnee => {
                Vec3::new(0.0, rise - 0.5 * dip, travel + 0.6 * dip)
            }
            _ => Vec3::new(0.0, rise - dip, travel),
        });
        for hand in [Landmark::LeftWrist, Landmark::RightWrist] {
            offset[hand] += wrist;
        }
        for elbow in [Landmark::LeftElbow, Landmark::RightElbow] {
            offset[elbow] += wrist * 0.5;
        }

        apply_droop(&mut offset, mods.vertical_droop);
        offset
    }
}
