//! Waving with the right hand
//!
//! The upper arm is raised sideways in the frontal plane and sways a
//! little; the forearm waves about the elbow. Every other landmark keeps
//! its rest position.

use std::f64::consts::TAU;

use pointlight_core::{ActionKind, Landmark};

use super::ActionGenerator;
use crate::primitives::{oscillate, rotate2d};
use crate::{ModulationParams, Pose, Skeleton, WaveParams};

#[derive(Debug, Clone)]
pub struct WaveGenerator {
    params: WaveParams,
}

impl WaveGenerator {
    pub fn new(params: WaveParams) -> Self {
        WaveGenerator { params }
    }
}

impl ActionGenerator for WaveGenerator {
    fn kind(&self) -> ActionKind {
        ActionKind::WavingAHand
    }

    fn generate(&self, phase: f64, mods: &ModulationParams, skeleton: &Skeleton) -> Pose {
        let p = &self.params;
        let amp = mods.amplitude_scale;
        let waves = p.waves_per_cycle as f64;

        let sway = oscillate(phase, waves, p.elbow_swing_deg.to_radians() * amp, 0.0);
        let flick = oscillate(
            phase,
            waves,
            p.forearm_swing_deg.to_radians() * amp,
            -TAU * waves * mods.phase_lag,
        );
        // The right arm is on -x, so raising it outward is clockwise in (x, y)
        let upper_angle = -(p.raise_deg.to_radians() + sway);
        let fore_angle = upper_angle - (p.forearm_bend_deg.to_radians() + flick);

        let shoulder = skeleton.rest(Landmark::RightShoulder);
        let elbow_rest = skeleton.rest(Landmark::RightElbow);
        let wrist_rest = skeleton.rest(Landmark::RightWrist);

        let upper = rotate2d((elbow_rest - shoulder).frontal(), upper_angle);
        let fore = rotate2d((wrist_rest - elbow_rest).frontal(), fore_angle);
        let elbow = shoulder.with_frontal(shoulder.frontal() + upper);
        let wrist = elbow.with_frontal(elbow.frontal() + fore);

        let mut offset = Pose::zero();
        offset[Landmark::RightElbow] = elbow - elbow_rest;
        offset[Landmark::RightWrist] = wrist - wrist_rest;
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointlight_core::Vec3;

    #[test]
    fn test_only_right_forearm_moves() {
        let skeleton = Skeleton::new();
        let wave = WaveGenerator::new(WaveParams::default());
        let mods = ModulationParams {
            amplitude_scale: 0.85,
            frequency_scale: 0.8,
            vertical_droop: 0.1,
            phase_lag: 0.08,
        };
        for i in 0..10 {
            let offset = wave.generate(i as f64 / 10.0, &mods, &skeleton);
            for (landmark, delta) in offset.iter() {
                match landmark {
                    Landmark::RightElbow | Landmark::RightWrist => {}
                    _ => assert_eq!(delta, Vec3::ZERO, "{} moved", landmark),
                }
            }
        }
    }

    #[test]
    fn test_hand_raised_above_head() {
        let skeleton = Skeleton::new();
        let wave = WaveGenerator::new(WaveParams::default());
        let posed = skeleton
            .rest_pose()
            .offset_by(&wave.generate(0.0, &ModulationParams::NEUTRAL, &skeleton));
        assert!(posed[Landmark::RightWrist].y > posed[Landmark::Head].y);
        assert!(posed[Landmark::RightElbow].x < posed[Landmark::RightShoulder].x);
    }

    #[test]
    fn test_arm_stays_rigid() {
        let skeleton = Skeleton::new();
        let wave = WaveGenerator::new(WaveParams::default());
        for i in 0..8 {
            let posed = skeleton
                .rest_pose()
                .offset_by(&wave.generate(i as f64 / 8.0, &ModulationParams::NEUTRAL, &skeleton));
            let upper = posed[Landmark::RightShoulder].distance(&posed[Landmark::RightElbow]);
            let fore = posed[Landmark::RightElbow].distance(&posed[Landmark::RightWrist]);
            let rest_upper = skeleton.bone_length(Landmark::RightShoulder, Landmark::RightElbow);
            let rest_fore = skeleton.bone_length(Landmark::RightElbow, Landmark::RightWrist);
            assert!((upper - rest_upper).abs() < 1e-9);
            assert!((fore - rest_fore).abs() < 1e-9);
        }
    }

    #[test]
    fn test_wave_oscillates() {
        let skeleton = Skeleton::new();
        let wave = WaveGenerator::new(WaveParams::default());
        let a = wave.generate(0.125, &ModulationParams::NEUTRAL, &skeleton);
        let b = wave.generate(0.375, &ModulationParams::NEUTRAL, &skeleton);
        assert!((a[Landmark::RightWrist].x - b[Landmark::RightWrist].x).abs() > 0.05);
    }
}
