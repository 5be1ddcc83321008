//! Projection Adapter - body-unit 3D poses to 2D points
//!
//! Pixel mapping (scale, origin, flipping y) belongs to the renderer.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use pointlight_core::{MotionError, MotionResult, Vec2, LANDMARK_COUNT};

use crate::primitives::rotate2d;
use crate::Pose;

/// Smallest perspective denominator; points at or behind the camera plane
/// are pinned here
pub const MIN_DEPTH: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum Projection {
    /// Drop depth
    Orthographic,
    /// Pinhole camera on the +z axis at `camera_z`, looking toward -z
    Perspective { camera_z: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub projection: Projection,
    /// Rotation of the figure about the vertical axis before projecting,
    /// radians
    pub yaw: f64,
}

impl Camera {
    /// Orthographic, facing the figure
    pub fn front() -> Self {
        Camera {
            projection: Projection::Orthographic,
            yaw: 0.0,
        }
    }

    /// Orthographic from the figure's right; forward motion runs left to
    /// right on screen
    pub fn side() -> Self {
        Camera {
            projection: Projection::Orthographic,
            yaw: -FRAC_PI_2,
        }
    }

    pub fn perspective(camera_z: f64) -> MotionResult<Self> {
        if !(camera_z.is_finite() && camera_z > 0.0) {
            return Err(MotionError::InvalidConfig(format!(
                "camera distance must be positive and finite, got {}",
                camera_z
            )));
        }
        Ok(Camera {
            projection: Projection::Perspective { camera_z },
            yaw: 0.0,
        })
    }

    pub fn with_yaw(mut self, yaw: f64) -> Self {
        self.yaw = yaw;
        self
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::front()
    }
}

/// Project every landmark, in canonical order
pub fn project(pose: &Pose, camera: &Camera) -> [Vec2; LANDMARK_COUNT] {
    let mut out = [Vec2::ZERO; LANDMARK_COUNT];
    for (slot, (_, p)) in out.iter_mut().zip(pose.iter()) {
        let p = if camera.yaw == 0.0 {
            p
        } else {
            p.with_horizontal(rotate2d(p.horizontal(), camera.yaw))
        };
        *slot = match camera.projection {
            Projection::Orthographic => p.frontal(),
            Projection::Perspective { camera_z } => {
                let scale = camera_z / (camera_z - p.z).max(MIN_DEPTH);
                Vec2::new(p.x * scale, p.y * scale)
            }
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Skeleton;
    use pointlight_core::{Landmark, Vec3};

    #[test]
    fn test_orthographic_front_is_identity_on_xy() {
        let pose = Skeleton::new().rest_pose().translated(Vec3::new(0.0, 0.0, 3.0));
        let points = project(&pose, &Camera::front());
        for (landmark, p) in pose.iter() {
            assert_eq!(points[landmark.index()], Vec2::new(p.x, p.y));
        }
    }

    #[test]
    fn test_side_view_shows_forward_motion() {
        let pose = Skeleton::new().rest_pose().translated(Vec3::new(0.0, 0.0, 1.0));
        let points = project(&pose, &Camera::side());
        let pelvis = points[Landmark::Pelvis.index()];
        assert!((pelvis.x - 1.0).abs() < 1e-12);
        assert!((pelvis.y - 1.0).abs() < 1e-12);
        // Left and right overlap in depth order only
        let l = points[Landmark::LeftHip.index()];
        let r = points[Landmark::RightHip.index()];
        assert!((l.x - r.x).abs() < 1e-12);
    }

    #[test]
    fn test_perspective_enlarges_nearer_points() {
        let camera = Camera::perspective(5.0).unwrap();
        let mut pose = Pose::zero();
        pose[Landmark::Head] = Vec3::new(1.0, 1.0, 0.0);
        pose[Landmark::Neck] = Vec3::new(1.0, 1.0, 1.0);
        pose[Landmark::Pelvis] = Vec3::new(1.0, 1.0, 10.0);
        let points = project(&pose, &camera);
        assert_eq!(points[Landmark::Head.index()], Vec2::new(1.0, 1.0));
        assert!((points[Landmark::Neck.index()].x - 1.25).abs() < 1e-12);
        // Behind the camera: clamped, still finite
        assert!(points[Landmark::Pelvis.index()].x.is_finite());
    }

    #[test]
    fn test_perspective_rejects_bad_distance() {
        assert!(Camera::perspective(0.0).is_err());
        assert!(Camera::perspective(f64::NAN).is_err());
        assert!(Camera::perspective(-2.0).is_err());
    }
}
