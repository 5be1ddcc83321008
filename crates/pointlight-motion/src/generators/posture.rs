//! Sitting down and lying down
//!
//! Each landmark moves along the straight line from its rest position to
//! the reference pose, weighted by `ease_in_out`. Limbs follow the torso
//! late by the phase lag. At phase 1 the offset is exactly the reference
//! delta.

use pointlight_core::ActionKind;

use super::ActionGenerator;
use crate::primitives::{ease_in_out, remap_lagged};
use crate::{ModulationParams, Pose, ReferencePose, Skeleton};

#[derive(Debug, Clone)]
pub struct PostureBlendGenerator {
    kind: ActionKind,
    target: ReferencePose,
}

impl PostureBlendGenerator {
    pub fn sitting() -> Self {
        PostureBlendGenerator {
            kind: ActionKind::SittingDown,
            target: ReferencePose::Seated,
        }
    }

    pub fn lying() -> Self {
        PostureBlendGenerator {
            kind: ActionKind::LyingDown,
            target: ReferencePose::Recumbent,
        }
    }

    pub fn target(&self) -> ReferencePose {
        self.target
    }
}

impl ActionGenerator for PostureBlendGenerator {
    fn kind(&self) -> ActionKind {
        self.kind
    }

    fn generate(&self, phase: f64, mods: &ModulationParams, skeleton: &Skeleton) -> Pose {
        let delta = skeleton.reference_delta(self.target);
        let torso = ease_in_out(phase);
        let limbs = ease_in_out(remap_lagged(phase, mods.phase_lag));
        delta.map(|landmark, d| {
            let weight = if landmark.is_distal() { limbs } else { torso };
            d * weight
        })
    }
}
