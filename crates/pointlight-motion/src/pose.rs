//! Pose - one position per landmark, in canonical order
//!
//! A pose is a value: built fresh for every query and updated functionally.
//! The fixed-size array makes a partially populated pose unrepresentable.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use pointlight_core::{Landmark, Vec3, LANDMARK_COUNT};

/// Full-body configuration (absolute positions or per-landmark offsets)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    points: [Vec3; LANDMARK_COUNT],
}

impl Pose {
    /// All landmarks at the origin (the identity offset)
    pub fn zero() -> Self {
        Pose {
            points: [Vec3::ZERO; LANDMARK_COUNT],
        }
    }

    pub fn from_points(points: [Vec3; LANDMARK_COUNT]) -> Self {
        Pose { points }
    }

    /// Build a pose by evaluating `f` for every landmark
    pub fn from_fn(mut f: impl FnMut(Landmark) -> Vec3) -> Self {
        let mut points = [Vec3::ZERO; LANDMARK_COUNT];
        for landmark in Landmark::ALL {
            points[landmark.index()] = f(landmark);
        }
        Pose { points }
    }

    /// Always 15
    pub const fn len(&self) -> usize {
        LANDMARK_COUNT
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, landmark: Landmark) -> Vec3 {
        self.points[landmark.index()]
    }

    pub fn set(&mut self, landmark: Landmark, position: Vec3) {
        self.points[landmark.index()] = position;
    }

    pub fn points(&self) -> &[Vec3; LANDMARK_COUNT] {
        &self.points
    }

    /// (landmark, position) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Landmark, Vec3)> + '_ {
        Landmark::ALL.iter().map(move |l| (*l, self.points[l.index()]))
    }

    /// Landmark-wise vector addition (rest ⊕ offset)
    pub fn offset_by(&self, offset: &Pose) -> Pose {
        Pose::from_fn(|l| self.get(l) + offset.get(l))
    }

    /// Landmark-wise difference (self − base)
    pub fn delta_from(&self, base: &Pose) -> Pose {
        Pose::from_fn(|l| self.get(l) - base.get(l))
    }

    pub fn map(&self, mut f: impl FnMut(Landmark, Vec3) -> Vec3) -> Pose {
        Pose::from_fn(|l| f(l, self.get(l)))
    }

    /// Translate every landmark by the same vector
    pub fn translated(&self, by: Vec3) -> Pose {
        self.map(|_, p| p + by)
    }

    /// Scale every landmark (used on offset poses)
    pub fn scaled(&self, s: f64) -> Pose {
        self.map(|_, p| p * s)
    }

    /// Landmark-wise interpolation; exact at t = 0 and t = 1
    pub fn lerp(&self, other: &Pose, t: f64) -> Pose {
        Pose::from_fn(|l| self.get(l).lerp(&other.get(l), t))
    }

    /// Mean landmark position
    pub fn centroid(&self) -> Vec3 {
        let sum = self
            .points
            .iter()
            .fold(Vec3::ZERO, |acc, p| acc + *p);
        sum * (1.0 / LANDMARK_COUNT as f64)
    }

    /// Largest per-landmark distance between two poses
    pub fn max_distance(&self, other: &Pose) -> f64 {
        self.points
            .iter()
            .zip(other.points.iter())
            .map(|(a, b)| a.distance(b))
            .fold(0.0, f64::max)
    }

    pub fn is_finite(&self) -> bool {
        self.points.iter().all(Vec3::is_finite)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::zero()
    }
}

impl Index<Landmark> for Pose {
    type Output = Vec3;

    fn index(&self, landmark: Landmark) -> &Vec3 {
        &self.points[landmark.index()]
    }
}

impl IndexMut<Landmark> for Pose {
    fn index_mut(&mut self, landmark: Landmark) -> &mut Vec3 {
        &mut self.points[landmark.index()]
    }
}
