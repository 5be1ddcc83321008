//! Invariant Checker - sampled verification of engine properties
//!
//! Checks, per condition:
//! - Every landmark finite
//! - Determinism (identical calls, identical poses)
//! - Cyclic wrap: pose(t) ≈ pose(t + period)
//! - Transitional clamp: pose(t ≥ duration) == pose(duration)
//! - Segment lengths stay within bounds of their rest length

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pointlight_core::Landmark;
use pointlight_motion::{MotionEngine, Pose};

use crate::{Condition, StimulusMatrix};

/// Checker configuration
#[derive(Clone, Debug)]
pub struct CheckerConfig {
    /// Sampled instants per condition
    pub samples: usize,
    /// Distance tolerance for the wrap check
    pub tolerance: f64,
    /// Shortest allowed segment, as a fraction of its rest length
    pub min_bone_ratio: f64,
    /// Longest allowed segment, as a multiple of its rest length
    pub max_bone_ratio: f64,
    /// Random seed for sample times
    pub seed: u64,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            samples: 32,
            tolerance: 1e-9,
            min_bone_ratio: 0.25,
            max_bone_ratio: 2.0,
            seed: 42,
        }
    }
}

impl CheckerConfig {
    /// Few samples for quick tests
    pub fn light() -> Self {
        CheckerConfig {
            samples: 8,
            ..Self::default()
        }
    }

    /// Dense sampling
    pub fn thorough() -> Self {
        CheckerConfig {
            samples: 256,
            ..Self::default()
        }
    }
}

/// A broken invariant
#[derive(Clone, Debug, PartialEq)]
pub enum Violation {
    NonFinite {
        condition: Condition,
        t: f64,
    },
    Nondeterministic {
        condition: Condition,
        t: f64,
    },
    WrapMismatch {
        condition: Condition,
        t: f64,
        distance: f64,
    },
    ClampMismatch {
        condition: Condition,
        t: f64,
    },
    BoneLength {
        condition: Condition,
        t: f64,
        bone: (Landmark, Landmark),
        ratio: f64,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NonFinite { condition, t } => {
                write!(f, "{} at t={}: non-finite landmark", condition, t)
            }
            Violation::Nondeterministic { condition, t } => {
                write!(f, "{} at t={}: repeated call differs", condition, t)
            }
            Violation::WrapMismatch {
                condition,
                t,
                distance,
            } => write!(
                f,
                "{} at t={}: pose one period later is {} away",
                condition, t, distance
            ),
            Violation::ClampMismatch { condition, t } => {
                write!(f, "{} at t={}: pose differs from end pose", condition, t)
            }
            Violation::BoneLength {
                condition,
                t,
                bone,
                ratio,
            } => write!(
                f,
                "{} at t={}: {}-{} at {:.3}× rest length",
                condition, t, bone.0, bone.1, ratio
            ),
        }
    }
}

/// Outcome of a check run
#[derive(Clone, Debug, Default)]
pub struct CheckReport {
    pub poses_checked: usize,
    pub violations: Vec<Violation>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn merge(&mut self, other: CheckReport) {
        self.poses_checked += other.poses_checked;
        self.violations.extend(other.violations);
    }
}

/// Samples an engine over conditions and collects violations
pub struct InvariantChecker<'a> {
    engine: &'a MotionEngine,
    config: CheckerConfig,
}

impl<'a> InvariantChecker<'a> {
    pub fn new(engine: &'a MotionEngine, config: CheckerConfig) -> Self {
        InvariantChecker { engine, config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    pub fn check_matrix(&self, matrix: &StimulusMatrix) -> CheckReport {
        let mut report = CheckReport::new();
        for condition in matrix {
            report.merge(self.check(condition));
        }
        report
    }

    pub fn check(&self, condition: &Condition) -> CheckReport {
        let mut report = CheckReport::new();
        let engine = self.engine;
        let kind = condition.action;
        let mods = condition.mods();
        let spec = engine.spec(kind);
        let period = engine.period_of(kind, &mods);

        let mut rng = StdRng::seed_from_u64(self.config.seed ^ kind as u64);
        for _ in 0..self.config.samples {
            let t = rng.gen_range(0.0..4.0 * period);
            let pose = engine.pose_for(kind, t, &mods);
            report.poses_checked += 1;

            if !pose.is_finite() {
                report
                    .violations
                    .push(Violation::NonFinite { condition: *condition, t });
                continue;
            }
            if engine.pose_for(kind, t, &mods) != pose {
                report
                    .violations
                    .push(Violation::Nondeterministic { condition: *condition, t });
            }
            self.check_bones(condition, t, &pose, &mut report);

            if spec.is_cyclic() {
                let later = t + period;
                let a = engine.phase_at(kind, t, &mods).value();
                let b = engine.phase_at(kind, later, &mods).value();
                // Rounding can land the two instants on opposite sides of
                // the wrap; those are not comparable
                if (a - b).abs() > 0.5 {
                    continue;
                }
                let distance = pose.max_distance(&engine.pose_for(kind, later, &mods));
                if distance > self.config.tolerance {
                    report.violations.push(Violation::WrapMismatch {
                        condition: *condition,
                        t,
                        distance,
                    });
                }
            }
        }

        if !spec.is_cyclic() {
            let end = engine.pose_for(kind, period, &mods);
            for t in [period * 1.5, period + rng.gen_range(0.0..100.0)] {
                if engine.pose_for(kind, t, &mods) != end {
                    report
                        .violations
                        .push(Violation::ClampMismatch { condition: *condition, t });
                }
            }
        }

        report
    }

    fn check_bones(&self, condition: &Condition, t: f64, pose: &Pose, report: &mut CheckReport) {
        let skeleton = self.engine.skeleton();
        for &(a, b) in skeleton.bones() {
            let ratio = pose[a].distance(&pose[b]) / skeleton.bone_length(a, b);
            if ratio < self.config.min_bone_ratio || ratio > self.config.max_bone_ratio {
                report.violations.push(Violation::BoneLength {
                    condition: *condition,
                    t,
                    bone: (a, b),
                    ratio,
                });
            }
        }
    }
}
