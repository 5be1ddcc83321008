//! Action generators
//!
//! A generator maps a phase to an offset pose: the per-landmark
//! displacement from the skeleton's rest pose. Generators hold only their
//! shape parameters and never mutate after construction.

use std::fmt::Debug;

use pointlight_core::{ActionKind, ActionSpec, DurationSemantics, Landmark, Vec3};

use crate::{ModulationParams, Pose, Skeleton};

mod bow;
mod gait;
mod jump;
mod posture;
mod roll;
mod turn;
mod wave;

pub use bow::BowGenerator;
pub use gait::GaitGenerator;
pub use jump::JumpGenerator;
pub use posture::PostureBlendGenerator;
pub use roll::RollGenerator;
pub use turn::TurnGenerator;
pub use wave::WaveGenerator;

/// Produces the offset pose of one action at a given phase
pub trait ActionGenerator: Send + Sync + Debug {
    /// Action this generator animates
    fn kind(&self) -> ActionKind;

    /// Phase semantics; most generators use the action's default
    fn semantics(&self) -> DurationSemantics {
        self.kind().default_semantics()
    }

    fn spec(&self) -> ActionSpec {
        ActionSpec::new(self.kind(), self.semantics())
    }

    /// Offset pose at `phase`. Total over phase in [0, 1]; cyclic
    /// generators return to their phase-0 offset as phase → 1, apart from
    /// net travel.
    fn generate(&self, phase: f64, mods: &ModulationParams, skeleton: &Skeleton) -> Pose;
}

/// Lower the head, neck and shoulder girdle by `droop` body units and push
/// the head forward. Arms follow their shoulders so limb lengths hold.
pub(crate) fn apply_droop(offset: &mut Pose, droop: f64) {
    if droop == 0.0 {
        return;
    }
    offset[Landmark::Head] += Vec3::new(0.0, -droop, 0.5 * droop);
    offset[Landmark::Neck] += Vec3::new(0.0, -0.8 * droop, 0.25 * droop);
    for landmark in [
        Landmark::LeftShoulder,
        Landmark::RightShoulder,
        Landmark::LeftElbow,
        Landmark::RightElbow,
        Landmark::LeftWrist,
        Landmark::RightWrist,
    ] {
        offset[landmark] += Vec3::new(0.0, -0.6 * droop, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_droop_lowers_head_most() {
        let mut offset = Pose::zero();
        apply_droop(&mut offset, 0.1);
        assert!(offset[Landmark::Head].y < offset[Landmark::Neck].y);
        assert!(offset[Landmark::Neck].y < offset[Landmark::LeftShoulder].y);
        assert!(offset[Landmark::Head].z > 0.0);
        assert_eq!(offset[Landmark::Pelvis], Vec3::ZERO);
        assert_eq!(offset[Landmark::LeftAnkle], Vec3::ZERO);
        assert_eq!(offset[Landmark::LeftWrist], offset[Landmark::LeftShoulder]);
    }

    #[test]
    fn test_zero_droop_is_noop() {
        let mut offset = Pose::zero();
        apply_droop(&mut offset, 0.0);
        assert_eq!(offset, Pose::zero());
    }
}
