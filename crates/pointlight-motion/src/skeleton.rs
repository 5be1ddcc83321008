//! Skeleton Topology - rest pose, reference poses and bones
//!
//! Body units: ankles sit just above y = 0, the head at y = 1.7, the figure
//! faces +z and its left side is +x.

use pointlight_core::{Landmark, Vec3};

use crate::Pose;

/// Named full-body configurations used as blend endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferencePose {
    Standing,
    Seated,
    Recumbent,
}

/// Stick-figure segments (drawing and limb-length checks)
pub const BONES: [(Landmark, Landmark); 14] = [
    (Landmark::Head, Landmark::Neck),
    (Landmark::Neck, Landmark::LeftShoulder),
    (Landmark::Neck, Landmark::RightShoulder),
    (Landmark::LeftShoulder, Landmark::LeftElbow),
    (Landmark::LeftElbow, Landmark::LeftWrist),
    (Landmark::RightShoulder, Landmark::RightElbow),
    (Landmark::RightElbow, Landmark::RightWrist),
    (Landmark::Neck, Landmark::Pelvis),
    (Landmark::Pelvis, Landmark::LeftHip),
    (Landmark::Pelvis, Landmark::RightHip),
    (Landmark::LeftHip, Landmark::LeftKnee),
    (Landmark::LeftKnee, Landmark::LeftAnkle),
    (Landmark::RightHip, Landmark::RightKnee),
    (Landmark::RightKnee, Landmark::RightAnkle),
];

/// Standing rest position of a left-side or center landmark; right-side
/// landmarks mirror their partner.
fn standing(landmark: Landmark) -> Vec3 {
    match landmark {
        Landmark::Head => Vec3::new(0.0, 1.70, 0.0),
        Landmark::Neck => Vec3::new(0.0, 1.50, 0.0),
        Landmark::LeftShoulder => Vec3::new(0.20, 1.45, 0.0),
        Landmark::LeftElbow => Vec3::new(0.24, 1.17, 0.0),
        Landmark::LeftWrist => Vec3::new(0.26, 0.92, 0.0),
        Landmark::Pelvis => Vec3::new(0.0, 1.00, 0.0),
        Landmark::LeftHip => Vec3::new(0.10, 0.95, 0.0),
        Landmark::LeftKnee => Vec3::new(0.10, 0.52, 0.0),
        Landmark::LeftAnkle => Vec3::new(0.10, 0.08, 0.0),
        right => standing(right.mirror()).mirrored(),
    }
}

/// Seated on a chair-height support, hands resting on the thighs
fn seated(landmark: Landmark) -> Vec3 {
    match landmark {
        Landmark::Head => Vec3::new(0.0, 1.24, 0.02),
        Landmark::Neck => Vec3::new(0.0, 1.04, -0.02),
        Landmark::LeftShoulder => Vec3::new(0.20, 0.99, -0.03),
        Landmark::LeftElbow => Vec3::new(0.24, 0.74, 0.05),
        Landmark::LeftWrist => Vec3::new(0.22, 0.58, 0.26),
        Landmark::Pelvis => Vec3::new(0.0, 0.55, -0.10),
        Landmark::LeftHip => Vec3::new(0.10, 0.52, -0.08),
        Landmark::LeftKnee => Vec3::new(0.10, 0.52, 0.34),
        Landmark::LeftAnkle => Vec3::new(0.10, 0.08, 0.36),
        right => seated(right.mirror()).mirrored(),
    }
}

/// Lying on the back, feet where they stood, head toward -z
fn recumbent(landmark: Landmark) -> Vec3 {
    let upright = standing(landmark);
    let height = if landmark == Landmark::Head { 0.14 } else { 0.10 };
    Vec3::new(upright.x, height, 0.08 - upright.y)
}

/// Immutable skeleton: rest pose plus reference-pose deltas
#[derive(Debug, Clone)]
pub struct Skeleton {
    rest: Pose,
    seated_delta: Pose,
    recumbent_delta: Pose,
}

impl Skeleton {
    pub fn new() -> Self {
        let rest = Pose::from_fn(standing);
        let seated_delta = Pose::from_fn(seated).delta_from(&rest);
        let recumbent_delta = Pose::from_fn(recumbent).delta_from(&rest);
        Skeleton {
            rest,
            seated_delta,
            recumbent_delta,
        }
    }

    /// Neutral standing pose; every call returns an equal pose
    pub fn rest_pose(&self) -> Pose {
        self.rest
    }

    pub fn rest(&self, landmark: Landmark) -> Vec3 {
        self.rest.get(landmark)
    }

    /// Offset that carries the rest pose onto a reference pose
    pub fn reference_delta(&self, reference: ReferencePose) -> Pose {
        match reference {
            ReferencePose::Standing => Pose::zero(),
            ReferencePose::Seated => self.seated_delta,
            ReferencePose::Recumbent => self.recumbent_delta,
        }
    }

    /// Reference pose, defined as rest ⊕ delta so blends reproduce it exactly
    pub fn reference(&self, reference: ReferencePose) -> Pose {
        match reference {
            ReferencePose::Standing => self.rest,
            other => self.rest.offset_by(&self.reference_delta(other)),
        }
    }

    /// Segments of the stick figure
    pub fn bones(&self) -> &'static [(Landmark, Landmark)] {
        &BONES
    }

    /// Rest length of a segment
    pub fn bone_length(&self, from: Landmark, to: Landmark) -> f64 {
        self.rest(from).distance(&self.rest(to))
    }

    /// Height of the head above the pelvis at rest
    pub fn trunk_height(&self) -> f64 {
        self.rest(Landmark::Head).y - self.rest(Landmark::Pelvis).y
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_pose_is_stable() {
        let skeleton = Skeleton::new();
        assert_eq!(skeleton.rest_pose(), skeleton.rest_pose());
        assert_eq!(skeleton.rest_pose(), Skeleton::new().rest_pose());
        assert_eq!(skeleton.rest_pose().len(), 15);
    }

    #[test]
    fn test_rest_pose_is_left_right_symmetric() {
        let skeleton = Skeleton::new();
        for landmark in Landmark::ALL {
            let p = skeleton.rest(landmark);
            let q = skeleton.rest(landmark.mirror());
            assert_eq!(p, q.mirrored());
        }
    }

    #[test]
    fn test_reference_poses() {
        let skeleton = Skeleton::new();
        assert_eq!(skeleton.reference(ReferencePose::Standing), skeleton.rest_pose());

        let seated = skeleton.reference(ReferencePose::Seated);
        assert!(seated[Landmark::Pelvis].y < skeleton.rest(Landmark::Pelvis).y);
        assert!(seated[Landmark::LeftKnee].z > 0.3);

        let lying = skeleton.reference(ReferencePose::Recumbent);
        for (_, p) in lying.iter() {
            assert!(p.y <= 0.15);
        }
        assert!(lying[Landmark::Head].z < lying[Landmark::LeftAnkle].z);
    }

    #[test]
    fn test_bones_reach_every_landmark() {
        for landmark in Landmark::ALL {
            assert!(BONES.iter().any(|(a, b)| *a == landmark || *b == landmark));
        }
        let skeleton = Skeleton::new();
        assert_eq!(skeleton.bones().len(), 14);
        for (a, b) in BONES {
            assert!(skeleton.bone_length(a, b) > 0.05);
        }
    }
}
