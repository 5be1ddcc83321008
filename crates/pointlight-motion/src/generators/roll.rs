//! Forward roll
//!
//! The body tucks toward a ball around the roll center, turns one full
//! revolution forward about the lateral axis through that center and
//! rolls along +z without slipping: travel = rotation angle × radius.
//! The tuck releases before the end, so phase 1 is the standing pose
//! displaced by exactly 2π × radius. Droop and phase lag do not apply.

use std::f64::consts::TAU;

use pointlight_core::{ActionKind, Landmark, Vec3};

use super::ActionGenerator;
use crate::primitives::{ease_in_out, rotate2d_about};
use crate::{ModulationParams, Pose, RollParams, Skeleton};

#[derive(Debug, Clone)]
pub struct RollGenerator {
    params: RollParams,
}

impl RollGenerator {
    pub fn new(params: RollParams) -> Self {
        RollGenerator { params }
    }

    pub fn radius(&self) -> f64 {
        self.params.radius
    }

    /// Rotation progress: eased so the roll starts and ends at rest
    fn progress(phase: f64) -> f64 {
        ease_in_out(phase)
    }

    /// Roll center at `phase`, in body units
    pub fn center_at(&self, phase: f64) -> Vec3 {
        let r = self.params.radius;
        Vec3::new(0.0, r, TAU * r * Self::progress(phase))
    }

    /// Pelvis displacement at `phase`
    pub fn pelvis_offset(&self, phase: f64, mods: &ModulationParams, skeleton: &Skeleton) -> Vec3 {
        self.generate(phase, mods, skeleton)[Landmark::Pelvis]
    }

    /// How far the body is collapsed toward the ball, 0..1
    fn tuck_weight(&self, phase: f64) -> f64 {
        let window = self.params.tuck_window;
        let tucking = ease_in_out(phase / window);
        let releasing = ease_in_out((1.0 - phase) / window);
        tucking * releasing
    }
}

impl ActionGenerator for RollGenerator {
    fn kind(&self) -> ActionKind {
        ActionKind::ForwardRolling
    }

    fn generate(&self, phase: f64, _mods: &ModulationParams, skeleton: &Skeleton) -> Pose {
        let r = self.params.radius;
        let rest = skeleton.rest_pose();
        let centroid = rest.centroid();
        let center = Vec3::new(0.0, r, 0.0);

        let s = Self::progress(phase);
        // One revolution is the identity; keep phase 1 free of rounding
        let angle = -TAU * s.fract();
        let travel = Vec3::new(0.0, 0.0, TAU * r * s);

        let weight = self.tuck_weight(phase);

        Pose::from_fn(|landmark| {
            let p = rest[landmark];
            let ball = center + (p - centroid) * (1.0 - self.params.tuck);
            let tucked = p.lerp(&ball, weight);
            let rolled = if angle == 0.0 {
                tucked
            } else {
                tucked.with_sagittal(rotate2d_about(tucked.sagittal(), center.sagittal(), angle))
            };
            rolled - p + travel
        })
    }
}
