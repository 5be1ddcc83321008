//! Noise Source - explicit, seedable positional jitter
//!
//! Jitter is a pure function of (seed, landmark, phase): the generator is
//! re-seeded on every call, so there is no ambient RNG and no dependence on
//! call order. Phase is quantized before seeding.

use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pointlight_core::{Landmark, Vec3};

use crate::{JitterConfig, Pose};

/// Per-landmark displacement added after the generator offset
pub trait NoiseSource: Send + Sync + Debug {
    fn jitter(&self, landmark: Landmark, phase: f64) -> Vec3;

    /// Jitter for every landmark at `phase`
    fn jitter_pose(&self, phase: f64) -> Pose {
        Pose::from_fn(|landmark| self.jitter(landmark, phase))
    }
}

/// No jitter (the default)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl NoiseSource for NoJitter {
    fn jitter(&self, _landmark: Landmark, _phase: f64) -> Vec3 {
        Vec3::ZERO
    }
}

/// Largest jitter amplitude, body units
pub const MAX_JITTER_AMPLITUDE: f64 = 1.0;

/// Uniform jitter in `[-amplitude, amplitude]` per axis
#[derive(Debug, Clone)]
pub struct SeededJitter {
    seed: u64,
    amplitude: f64,
}

impl SeededJitter {
    /// Amplitude is taken as magnitude and capped at
    /// [`MAX_JITTER_AMPLITUDE`]; non-finite amplitude means no jitter
    pub fn new(seed: u64, amplitude: f64) -> Self {
        let amplitude = if amplitude.is_finite() {
            amplitude.abs().min(MAX_JITTER_AMPLITUDE)
        } else {
            0.0
        };
        SeededJitter { seed, amplitude }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    fn rng_for(&self, landmark: Landmark, phase: f64) -> StdRng {
        let mixed = self.seed
            ^ (landmark.index() as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
            ^ phase_bucket(phase).rotate_left(29);
        StdRng::seed_from_u64(mixed)
    }
}

/// Jitter resolution in phase
const PHASE_BUCKETS: u64 = 1_000_000;

/// Quantized phase, so instants that differ only by rounding share their
/// jitter. Phase 1 shares the bucket of phase 0.
fn phase_bucket(phase: f64) -> u64 {
    ((phase * PHASE_BUCKETS as f64).round() as u64) % PHASE_BUCKETS
}

impl From<&JitterConfig> for SeededJitter {
    fn from(config: &JitterConfig) -> Self {
        SeededJitter::new(config.seed, config.amplitude)
    }
}

impl NoiseSource for SeededJitter {
    fn jitter(&self, landmark: Landmark, phase: f64) -> Vec3 {
        if self.amplitude == 0.0 {
            return Vec3::ZERO;
        }
        let a = self.amplitude;
        let mut rng = self.rng_for(landmark, phase);
        Vec3::new(
            rng.gen_range(-a..=a),
            rng.gen_range(-a..=a),
            rng.gen_range(-a..=a),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_no_jitter_is_zero() {
        assert_eq!(NoJitter.jitter_pose(0.3), Pose::zero());
    }

    #[test]
    fn test_seeded_jitter_reproducible() {
        let a = SeededJitter::new(42, 0.01);
        let b = SeededJitter::new(42, 0.01);
        assert_eq!(a.jitter_pose(0.25), b.jitter_pose(0.25));
        // Call order does not matter
        let _ = a.jitter(Landmark::Head, 0.9);
        assert_eq!(
            a.jitter(Landmark::LeftKnee, 0.5),
            b.jitter(Landmark::LeftKnee, 0.5)
        );
    }

    #[test]
    fn test_seeds_and_landmarks_differ() {
        let a = SeededJitter::new(1, 0.01);
        let b = SeededJitter::new(2, 0.01);
        assert_ne!(a.jitter_pose(0.5), b.jitter_pose(0.5));
        assert_ne!(a.jitter(Landmark::Head, 0.5), a.jitter(Landmark::Neck, 0.5));
    }

    #[test]
    fn test_rounding_shares_jitter() {
        let noise = SeededJitter::new(3, 0.01);
        let phase: f64 = 0.3;
        let nudged = f64::from_bits(phase.to_bits() + 1);
        assert_eq!(noise.jitter_pose(phase), noise.jitter_pose(nudged));
        assert_eq!(noise.jitter_pose(0.0), noise.jitter_pose(1.0 - 1e-12));
        assert_ne!(noise.jitter_pose(0.3), noise.jitter_pose(0.31));
    }

    #[test]
    fn test_zero_amplitude() {
        let quiet = SeededJitter::new(9, 0.0);
        assert_eq!(quiet.jitter_pose(0.7), Pose::zero());
        assert_eq!(SeededJitter::new(9, f64::NAN).amplitude(), 0.0);
    }

    #[test]
    fn test_huge_amplitude_is_capped() {
        let noise = SeededJitter::new(5, 1e308);
        assert_eq!(noise.amplitude(), MAX_JITTER_AMPLITUDE);
        let pose = noise.jitter_pose(0.1);
        assert!(pose.is_finite());
        for (_, d) in pose.iter() {
            assert!(d.x.abs() <= MAX_JITTER_AMPLITUDE);
        }
        assert_eq!(SeededJitter::new(5, -1e308).amplitude(), MAX_JITTER_AMPLITUDE);
    }

    proptest! {
        #[test]
        fn prop_jitter_bounded(seed in any::<u64>(), phase in 0.0f64..1.0, amplitude in 0.0f64..0.1) {
            let noise = SeededJitter::new(seed, amplitude);
            for (_, d) in noise.jitter_pose(phase).iter() {
                prop_assert!(d.x.abs() <= amplitude);
                prop_assert!(d.y.abs() <= amplitude);
                prop_assert!(d.z.abs() <= amplitude);
            }
        }
    }
}
