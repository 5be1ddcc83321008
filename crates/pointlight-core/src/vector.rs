//! Vector math in abstract body units
//!
//! Axes: x is lateral (the figure's left is +x), y points up, z points in
//! the direction the figure faces at rest. Units are body units, not pixels.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// 2D point (display plane or a single plane of a 3D pose)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Distance to another point
    pub fn distance(&self, other: &Vec2) -> f64 {
        (*self - *other).length()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// 3D position or offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Distance to another position
    pub fn distance(&self, other: &Vec3) -> f64 {
        (*self - *other).length()
    }

    /// Linear interpolation, written so that `t == 0` returns `self` and
    /// `t == 1` returns `other` bit for bit
    pub fn lerp(&self, other: &Vec3, t: f64) -> Vec3 {
        let s = 1.0 - t;
        Vec3 {
            x: self.x * s + other.x * t,
            y: self.y * s + other.y * t,
            z: self.z * s + other.z * t,
        }
    }

    /// Mirror across the sagittal (y-z) plane
    pub fn mirrored(&self) -> Vec3 {
        Vec3::new(-self.x, self.y, self.z)
    }

    /// Sagittal-plane view (z, y): forward and up
    pub fn sagittal(&self) -> Vec2 {
        Vec2::new(self.z, self.y)
    }

    /// Horizontal-plane view (x, z)
    pub fn horizontal(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }

    /// Rebuild from a sagittal-plane point, keeping x
    pub fn with_sagittal(&self, p: Vec2) -> Vec3 {
        Vec3::new(self.x, p.y, p.x)
    }

    /// Rebuild from a horizontal-plane point, keeping y
    pub fn with_horizontal(&self, p: Vec2) -> Vec3 {
        Vec3::new(p.x, self.y, p.y)
    }

    /// Frontal-plane view (x, y)
    pub fn frontal(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Rebuild from a frontal-plane point, keeping z
    pub fn with_frontal(&self, p: Vec2) -> Vec3 {
        Vec3::new(p.x, p.y, self.z)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lerp_endpoints_exact() {
        let a = Vec3::new(0.1, 1.7, -0.3);
        let b = Vec3::new(0.35, 0.55, 0.27);

        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);

        let mid = a.lerp(&b, 0.5);
        assert!((mid.x - 0.225).abs() < 1e-12);
        assert!((mid.y - 1.125).abs() < 1e-12);
    }

    #[test]
    fn test_plane_views_roundtrip() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(p.with_sagittal(p.sagittal()), p);
        assert_eq!(p.with_horizontal(p.horizontal()), p);
        assert_eq!(p.with_frontal(p.frontal()), p);
        assert_eq!(p.sagittal(), Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_distance() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 4.0, 0.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert_eq!(b.mirrored(), Vec3::new(-3.0, 4.0, 0.0));
    }

    proptest! {
        #[test]
        fn prop_lerp_hits_endpoints(
            ax in -10.0f64..10.0, ay in -10.0f64..10.0, az in -10.0f64..10.0,
            bx in -10.0f64..10.0, by in -10.0f64..10.0, bz in -10.0f64..10.0,
        ) {
            let a = Vec3::new(ax, ay, az);
            let b = Vec3::new(bx, by, bz);
            prop_assert_eq!(a.lerp(&b, 0.0), a);
            prop_assert_eq!(a.lerp(&b, 1.0), b);
        }
    }
}
