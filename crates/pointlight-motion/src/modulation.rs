//! Modulation Layer - categorical traits to continuous motion scalars
//!
//! Weight and affect each contribute an effect; amplitude and frequency
//! effects multiply, droop and lag effects add.

use serde::{Deserialize, Serialize};

use pointlight_core::{Affect, MotionResult, WeightClass};

/// Continuous scalars consumed by the generators and the assembler
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModulationParams {
    /// Multiplier on excursions (stride, swing, jump height, angles)
    pub amplitude_scale: f64,
    /// Tempo multiplier applied to elapsed time
    pub frequency_scale: f64,
    /// Head/torso lowering, body units
    pub vertical_droop: f64,
    /// Limb delay relative to the torso, in cycles
    pub phase_lag: f64,
}

/// One trait's contribution
#[derive(Debug, Clone, Copy)]
struct TraitEffect {
    amplitude: f64,
    frequency: f64,
    droop: f64,
    lag: f64,
}

const LIGHT: TraitEffect = TraitEffect {
    amplitude: 1.00,
    frequency: 1.15,
    droop: 0.00,
    lag: 0.00,
};

const HEAVY: TraitEffect = TraitEffect {
    amplitude: 0.85,
    frequency: 0.80,
    droop: 0.04,
    lag: 0.00,
};

const HAPPY: TraitEffect = TraitEffect {
    amplitude: 1.10,
    frequency: 1.00,
    droop: 0.00,
    lag: 0.00,
};

const SAD: TraitEffect = TraitEffect {
    amplitude: 0.75,
    frequency: 0.90,
    droop: 0.06,
    lag: 0.08,
};

impl ModulationParams {
    /// No modulation: unit scales, no droop, no lag
    pub const NEUTRAL: ModulationParams = ModulationParams {
        amplitude_scale: 1.0,
        frequency_scale: 1.0,
        vertical_droop: 0.0,
        phase_lag: 0.0,
    };

    /// Total over all four combinations, deterministic, side-effect free
    pub fn resolve(weight: WeightClass, affect: Affect) -> Self {
        let w = match weight {
            WeightClass::Light => LIGHT,
            WeightClass::Heavy => HEAVY,
        };
        let a = match affect {
            Affect::Happy => HAPPY,
            Affect::Sad => SAD,
        };
        ModulationParams {
            amplitude_scale: w.amplitude * a.amplitude,
            frequency_scale: w.frequency * a.frequency,
            vertical_droop: w.droop + a.droop,
            phase_lag: w.lag + a.lag,
        }
    }
}

impl Default for ModulationParams {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Parse trait names and resolve them; invalid names fail here, before any
/// frame is produced
pub fn make_modulation(weight: &str, affect: &str) -> MotionResult<ModulationParams> {
    let weight = weight.parse::<WeightClass>().map_err(|e| {
        tracing::warn!(weight, "rejected weight class");
        e
    })?;
    let affect = affect.parse::<Affect>().map_err(|e| {
        tracing::warn!(affect, "rejected affect");
        e
    })?;
    Ok(ModulationParams::resolve(weight, affect))
}
