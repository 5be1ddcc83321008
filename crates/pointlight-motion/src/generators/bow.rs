//! Bowing: the upper body pitches forward about the pelvis and returns

use pointlight_core::{ActionKind, Landmark, Vec2};

use super::{apply_droop, ActionGenerator};
use crate::primitives::{ease_in_out, remap_lagged, rotate2d_about, triangle};
use crate::{BowParams, ModulationParams, Pose, Skeleton};

const TRUNK: [Landmark; 4] = [
    Landmark::Head,
    Landmark::Neck,
    Landmark::LeftShoulder,
    Landmark::RightShoulder,
];

/// (shoulder, elbow, wrist) per side
const ARMS: [(Landmark, Landmark, Landmark); 2] = [
    (Landmark::LeftShoulder, Landmark::LeftElbow, Landmark::LeftWrist),
    (Landmark::RightShoulder, Landmark::RightElbow, Landmark::RightWrist),
];

#[derive(Debug, Clone)]
pub struct BowGenerator {
    params: BowParams,
}

impl BowGenerator {
    pub fn new(params: BowParams) -> Self {
        BowGenerator { params }
    }

    /// Trunk pitch at `phase`, radians (positive = forward)
    pub fn trunk_angle(&self, phase: f64, mods: &ModulationParams) -> f64 {
        self.params.max_angle_deg.to_radians() * mods.amplitude_scale * ease_in_out(triangle(phase))
    }
}

impl ActionGenerator for BowGenerator {
    fn kind(&self) -> ActionKind {
        ActionKind::Bowing
    }

    fn generate(&self, phase: f64, mods: &ModulationParams, skeleton: &Skeleton) -> Pose {
        let trunk = self.trunk_angle(phase, mods);
        let arms = self.trunk_angle(remap_lagged(phase, mods.phase_lag), mods);
        let pivot = skeleton.rest(Landmark::Pelvis).sagittal();

        // Sagittal plane is (z, y); pitching forward is clockwise
        let pitch = |point: Vec2| rotate2d_about(point, pivot, -trunk);

        let rest = skeleton.rest_pose();
        let mut posed = rest;
        for landmark in TRUNK {
            let p = rest[landmark];
            posed[landmark] = p.with_sagittal(pitch(p.sagittal()));
        }

        // Arms ride the trunk, then hang back by the lag
        for (shoulder, elbow, wrist) in ARMS {
            let joint = posed[shoulder].sagittal();
            for landmark in [elbow, wrist] {
                let p = rest[landmark];
                let carried = pitch(p.sagittal());
                posed[landmark] = p.with_sagittal(rotate2d_about(carried, joint, trunk - arms));
            }
        }

        let mut offset = posed.delta_from(&rest);
        apply_droop(&mut offset, mods.vertical_droop);
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BONES;

    #[test]
    fn test_bows_down_and_back() {
        let skeleton = Skeleton::new();
        let bow = BowGenerator::new(BowParams::default());
        let mods = ModulationParams::NEUTRAL;

        let start = bow.generate(0.0, &mods, &skeleton);
        let deepest = bow.generate(0.5, &mods, &skeleton);
        let end = bow.generate(1.0, &mods, &skeleton);

        assert!(start.max_distance(&Pose::zero()) < 1e-12);
        assert!(end.max_distance(&Pose::zero()) < 1e-12);
        assert!(deepest[Landmark::Head].z > 0.5);
        assert!(deepest[Landmark::Head].y < -0.3);
        assert_eq!(deepest[Landmark::Pelvis], pointlight_core::Vec3::ZERO);
        assert_eq!(deepest[Landmark::LeftKnee], pointlight_core::Vec3::ZERO);
    }

    #[test]
    fn test_head_stays_on_trunk_radius() {
        let skeleton = Skeleton::new();
        let bow = BowGenerator::new(BowParams::default());
        let posed = skeleton
            .rest_pose()
            .offset_by(&bow.generate(0.4, &ModulationParams::NEUTRAL, &skeleton));
        let radius = posed[Landmark::Head].distance(&posed[Landmark::Pelvis]);
        assert!((radius - skeleton.trunk_height()).abs() < 1e-9);
    }

    #[test]
    fn test_limbs_stay_rigid_with_lag() {
        let skeleton = Skeleton::new();
        let bow = BowGenerator::new(BowParams::default());
        let sad = ModulationParams {
            amplitude_scale: 0.75,
            frequency_scale: 0.9,
            vertical_droop: 0.0,
            phase_lag: 0.08,
        };
        for phase in [0.1, 0.3, 0.5, 0.7] {
            let posed = skeleton
                .rest_pose()
                .offset_by(&bow.generate(phase, &sad, &skeleton));
            for (a, b) in BONES {
                let drift = (posed[a].distance(&posed[b]) - skeleton.bone_length(a, b)).abs();
                assert!(drift < 1e-9, "{:?}-{:?} drift {}", a, b, drift);
            }
        }
    }
}
