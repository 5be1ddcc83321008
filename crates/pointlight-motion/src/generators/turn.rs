//! Turning around on the spot about the vertical axis through the pelvis

use std::f64::consts::{PI, TAU};

use pointlight_core::{ActionKind, DurationSemantics, Landmark, Vec3};

use super::{apply_droop, ActionGenerator};
use crate::primitives::{oscillate, rotate2d_about};
use crate::{ModulationParams, Pose, Skeleton, TurnExtent, TurnParams};

#[derive(Debug, Clone)]
pub struct TurnGenerator {
    params: TurnParams,
}

impl TurnGenerator {
    pub fn new(params: TurnParams) -> Self {
        TurnGenerator { params }
    }

    /// Heading change at `phase`, radians (counter-clockwise seen from above)
    pub fn heading(&self, phase: f64) -> f64 {
        match self.params.extent {
            TurnExtent::Full => TAU * phase,
            TurnExtent::Half => PI * phase,
        }
    }

    fn steps(&self) -> f64 {
        match self.params.extent {
            TurnExtent::Full => self.params.steps_per_turn as f64,
            TurnExtent::Half => self.params.steps_per_turn as f64 * 0.5,
        }
    }
}

impl ActionGenerator for TurnGenerator {
    fn kind(&self) -> ActionKind {
        ActionKind::TurningAround
    }

    fn semantics(&self) -> DurationSemantics {
        match self.params.extent {
            TurnExtent::Full => DurationSemantics::Cyclic,
            TurnExtent::Half => DurationSemantics::Transitional,
        }
    }

    fn generate(&self, phase: f64, mods: &ModulationParams, skeleton: &Skeleton) -> Pose {
        let rest = skeleton.rest_pose();
        let mut drooped = Pose::zero();
        apply_droop(&mut drooped, mods.vertical_droop);
        let body = rest.offset_by(&drooped);

        let heading = self.heading(phase);
        let pivot = skeleton.rest(Landmark::Pelvis).horizontal();
        let bob = oscillate(phase, self.steps(), self.params.bob * mods.amplitude_scale, 0.0);

        Pose::from_fn(|landmark| {
            let p = body[landmark];
            let turned = p.with_horizontal(rotate2d_about(p.horizontal(), pivot, heading));
            let lift = match landmark {
                Landmark::LeftAnkle | Landmark::RightAnkle => 0.0,
                _ => bob,
            };
            turned - rest[landmark] + Vec3::new(0.0, lift, 0.0)
        })
    }
}
