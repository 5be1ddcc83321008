//! Walking and running
//!
//! Legs swing in antiphase (π apart), each arm in counter-phase to the
//! leg on its side. The torso bobs twice per cycle.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use pointlight_core::{ActionKind, Landmark, Vec3};

use super::{apply_droop, ActionGenerator};
use crate::primitives::oscillate;
use crate::{GaitParams, ModulationParams, Pose, Skeleton};

#[derive(Debug, Clone)]
pub struct GaitGenerator {
    kind: ActionKind,
    params: GaitParams,
}

struct Limbs {
    hip: Landmark,
    knee: Landmark,
    ankle: Landmark,
    elbow: Landmark,
    wrist: Landmark,
    /// Phase offset of this side's leg, radians
    offset: f64,
}

const LEFT: Limbs = Limbs {
    hip: Landmark::LeftHip,
    knee: Landmark::LeftKnee,
    ankle: Landmark::LeftAnkle,
    elbow: Landmark::LeftElbow,
    wrist: Landmark::LeftWrist,
    offset: 0.0,
};

const RIGHT: Limbs = Limbs {
    hip: Landmark::RightHip,
    knee: Landmark::RightKnee,
    ankle: Landmark::RightAnkle,
    elbow: Landmark::RightElbow,
    wrist: Landmark::RightWrist,
    offset: PI,
};

impl GaitGenerator {
    pub fn new(kind: ActionKind, params: GaitParams) -> Self {
        GaitGenerator { kind, params }
    }

    pub fn walking(params: GaitParams) -> Self {
        Self::new(ActionKind::Walking, params)
    }

    pub fn running(params: GaitParams) -> Self {
        Self::new(ActionKind::Running, params)
    }

    pub fn params(&self) -> &GaitParams {
        &self.params
    }

    fn swing_side(&self, offset: &mut Pose, side: &Limbs, phase: f64, mods: &ModulationParams) {
        let p = &self.params;
        let amp = mods.amplitude_scale;
        let lag = -TAU * mods.phase_lag;

        // Legs
        let leg_angle = TAU * phase + side.offset + lag;
        let ankle_z = oscillate(phase, 1.0, p.stride * amp, side.offset + lag);
        let lift = p.knee_lift * amp * leg_angle.sin().max(0.0);
        offset[side.ankle] += Vec3::new(0.0, lift, ankle_z);
        offset[side.knee] += Vec3::new(0.0, 0.5 * lift, 0.5 * ankle_z + 0.5 * lift);
        offset[side.hip] += Vec3::new(0.0, 0.0, 0.1 * ankle_z);

        // Arms, counter-phase to the same-side leg
        let wrist_z = oscillate(phase, 1.0, p.arm_swing * amp, side.offset + PI + lag);
        let flex = p.elbow_flex * amp;
        offset[side.wrist] += Vec3::new(0.0, 0.8 * flex, wrist_z + flex);
        offset[side.elbow] += Vec3::new(0.0, 0.0, 0.5 * wrist_z - 0.25 * flex);
    }
}

impl ActionGenerator for GaitGenerator {
    fn kind(&self) -> ActionKind {
        self.kind
    }

    fn generate(&self, phase: f64, mods: &ModulationParams, skeleton: &Skeleton) -> Pose {
        let p = &self.params;
        let amp = mods.amplitude_scale;
        let mut offset = Pose::zero();

        self.swing_side(&mut offset, &LEFT, phase, mods);
        self.swing_side(&mut offset, &RIGHT, phase, mods);

        // Double-frequency bob, lowest at double support; heavier droop
        // exaggerates the weight shift
        let bob = oscillate(
            phase,
            2.0,
            p.bob * amp * (1.0 + 5.0 * mods.vertical_droop),
            -FRAC_PI_2,
        );
        let pelvis_y = skeleton.rest(Landmark::Pelvis).y;
        let trunk = skeleton.trunk_height();
        for landmark in Landmark::ALL {
            let vertical = match landmark {
                Landmark::LeftAnkle | Landmark::RightAnkle => 0.0,
                Landmark::LeftKnee | Landmark::RightKnee => 0.5 * bob,
                _ => bob,
            };
            let height = skeleton.rest(landmark).y - pelvis_y;
            let lean = if height > 0.0 {
                p.lean * amp * height / trunk
            } else {
                0.0
            };
            offset[landmark] += Vec3::new(0.0, vertical, lean);
        }

        apply_droop(&mut offset, mods.vertical_droop);
        offset
    }
}
