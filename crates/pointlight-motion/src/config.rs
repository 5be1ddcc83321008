//! Engine configuration
//!
//! Every section has defaults, so a JSON file only needs the values it
//! changes. `EngineConfig::validate` runs when an engine is built.

use serde::{Deserialize, Deserializer, Serialize};

use pointlight_core::{MotionError, MotionResult};
use pointlight_time::TimingConfig;

use crate::MAX_JITTER_AMPLITUDE;

/// Complete engine configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Base periods and durations
    pub timing: TimingConfig,
    /// Per-generator shape parameters
    pub generators: GeneratorConfig,
    /// Optional seeded positional jitter
    pub jitter: Option<JitterConfig>,
}

impl EngineConfig {
    pub fn validate(&self) -> MotionResult<()> {
        self.timing.validate()?;
        self.generators.validate()?;
        if let Some(jitter) = &self.jitter {
            non_negative("jitter.amplitude", jitter.amplitude)?;
            if jitter.amplitude > MAX_JITTER_AMPLITUDE {
                return Err(MotionError::InvalidConfig(format!(
                    "jitter.amplitude must be at most {}, got {}",
                    MAX_JITTER_AMPLITUDE, jitter.amplitude
                )));
            }
        }
        Ok(())
    }
}

/// Shape parameters for every action family
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    #[serde(deserialize_with = "walking_gait")]
    pub walking: GaitParams,
    #[serde(deserialize_with = "running_gait")]
    pub running: GaitParams,
    pub jump: JumpParams,
    pub bow: BowParams,
    pub turn: TurnParams,
    pub wave: WaveParams,
    pub roll: RollParams,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            walking: GaitParams::walking(),
            running: GaitParams::running(),
            jump: JumpParams::default(),
            bow: BowParams::default(),
            turn: TurnParams::default(),
            wave: WaveParams::default(),
            roll: RollParams::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> MotionResult<()> {
        for (name, gait) in [("walking", &self.walking), ("running", &self.running)] {
            non_negative(&format!("{}.stride", name), gait.stride)?;
            non_negative(&format!("{}.knee_lift", name), gait.knee_lift)?;
            non_negative(&format!("{}.arm_swing", name), gait.arm_swing)?;
            non_negative(&format!("{}.bob", name), gait.bob)?;
            finite(&format!("{}.lean", name), gait.lean)?;
            non_negative(&format!("{}.elbow_flex", name), gait.elbow_flex)?;
        }

        non_negative("jump.height", self.jump.height)?;
        non_negative("jump.crouch_depth", self.jump.crouch_depth)?;
        non_negative("jump.arm_raise", self.jump.arm_raise)?;
        non_negative("jump.forward_distance", self.jump.forward_distance)?;

        finite("bow.max_angle_deg", self.bow.max_angle_deg)?;

        non_negative("turn.bob", self.turn.bob)?;
        if self.turn.steps_per_turn == 0 {
            return Err(MotionError::InvalidConfig(
                "turn.steps_per_turn must be at least 1".to_string(),
            ));
        }

        finite("wave.raise_deg", self.wave.raise_deg)?;
        finite("wave.forearm_bend_deg", self.wave.forearm_bend_deg)?;
        non_negative("wave.elbow_swing_deg", self.wave.elbow_swing_deg)?;
        non_negative("wave.forearm_swing_deg", self.wave.forearm_swing_deg)?;
        if self.wave.waves_per_cycle == 0 {
            return Err(MotionError::InvalidConfig(
                "wave.waves_per_cycle must be at least 1".to_string(),
            ));
        }

        positive("roll.radius", self.roll.radius)?;
        if !(0.0..1.0).contains(&self.roll.tuck) {
            return Err(MotionError::InvalidConfig(format!(
                "roll.tuck must be in [0, 1), got {}",
                self.roll.tuck
            )));
        }
        if !(self.roll.tuck_window > 0.0 && self.roll.tuck_window <= 0.5) {
            return Err(MotionError::InvalidConfig(format!(
                "roll.tuck_window must be in (0, 0.5], got {}",
                self.roll.tuck_window
            )));
        }

        tracing::debug!("generator parameters validated");
        Ok(())
    }
}

/// Walking / running shape
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaitParams {
    /// Peak forward/back ankle excursion
    pub stride: f64,
    /// Peak ankle lift during the forward half of a leg's swing
    pub knee_lift: f64,
    /// Peak wrist excursion
    pub arm_swing: f64,
    /// Vertical torso bob (double frequency)
    pub bob: f64,
    /// Forward lean at head height
    pub lean: f64,
    /// Forward/up wrist offset from a bent elbow
    pub elbow_flex: f64,
}

impl GaitParams {
    pub fn walking() -> Self {
        GaitParams {
            stride: 0.22,
            knee_lift: 0.10,
            arm_swing: 0.16,
            bob: 0.02,
            lean: 0.0,
            elbow_flex: 0.0,
        }
    }

    pub fn running() -> Self {
        GaitParams {
            stride: 0.38,
            knee_lift: 0.24,
            arm_swing: 0.24,
            bob: 0.05,
            lean: 0.08,
            elbow_flex: 0.14,
        }
    }
}

impl Default for GaitParams {
    fn default() -> Self {
        Self::walking()
    }
}

/// A partial gait section; missing values come from the gait's own preset
#[derive(Deserialize)]
struct GaitOverrides {
    stride: Option<f64>,
    knee_lift: Option<f64>,
    arm_swing: Option<f64>,
    bob: Option<f64>,
    lean: Option<f64>,
    elbow_flex: Option<f64>,
}

impl GaitOverrides {
    fn over(self, base: GaitParams) -> GaitParams {
        GaitParams {
            stride: self.stride.unwrap_or(base.stride),
            knee_lift: self.knee_lift.unwrap_or(base.knee_lift),
            arm_swing: self.arm_swing.unwrap_or(base.arm_swing),
            bob: self.bob.unwrap_or(base.bob),
            lean: self.lean.unwrap_or(base.lean),
            elbow_flex: self.elbow_flex.unwrap_or(base.elbow_flex),
        }
    }
}

fn walking_gait<'de, D: Deserializer<'de>>(deserializer: D) -> Result<GaitParams, D::Error> {
    Ok(GaitOverrides::deserialize(deserializer)?.over(GaitParams::walking()))
}

fn running_gait<'de, D: Deserializer<'de>>(deserializer: D) -> Result<GaitParams, D::Error> {
    Ok(GaitOverrides::deserialize(deserializer)?.over(GaitParams::running()))
}

/// Jumping shape
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpParams {
    /// Peak torso rise
    pub height: f64,
    /// Pelvis drop at the crouch
    pub crouch_depth: f64,
    /// Wrist rise at the apex
    pub arm_raise: f64,
    /// Horizontal travel per jump (forward variant)
    pub forward_distance: f64,
}

impl Default for JumpParams {
    fn default() -> Self {
        JumpParams {
            height: 0.35,
            crouch_depth: 0.18,
            arm_raise: 0.30,
            forward_distance: 0.80,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BowParams {
    /// Deepest forward lean, degrees
    pub max_angle_deg: f64,
}

impl Default for BowParams {
    fn default() -> Self {
        BowParams { max_angle_deg: 60.0 }
    }
}

/// How far the turning action rotates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TurnExtent {
    /// 2π per cycle; the action loops
    Full,
    /// π over the action; the action is transitional
    Half,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnParams {
    pub extent: TurnExtent,
    /// Vertical stepping bob
    pub bob: f64,
    /// Stepping bobs per full turn
    pub steps_per_turn: u32,
}

impl Default for TurnParams {
    fn default() -> Self {
        TurnParams {
            extent: TurnExtent::Full,
            bob: 0.015,
            steps_per_turn: 4,
        }
    }
}

/// Waving shape (right arm)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    /// Upper-arm elevation from hanging, degrees
    pub raise_deg: f64,
    /// Resting elbow bend, degrees
    pub forearm_bend_deg: f64,
    /// Upper-arm oscillation, degrees
    pub elbow_swing_deg: f64,
    /// Forearm oscillation, degrees
    pub forearm_swing_deg: f64,
    /// Forearm waves per cycle
    pub waves_per_cycle: u32,
}

impl Default for WaveParams {
    fn default() -> Self {
        WaveParams {
            raise_deg: 150.0,
            forearm_bend_deg: 20.0,
            elbow_swing_deg: 6.0,
            forearm_swing_deg: 30.0,
            waves_per_cycle: 2,
        }
    }
}

/// Forward roll shape
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollParams {
    /// Effective rolling radius; travel = angle · radius
    pub radius: f64,
    /// How far landmarks collapse toward the roll center, 0..1
    pub tuck: f64,
    /// Fraction of the roll spent tucking (and untucking)
    pub tuck_window: f64,
}

impl Default for RollParams {
    fn default() -> Self {
        RollParams {
            radius: 0.4,
            tuck: 0.55,
            tuck_window: 0.15,
        }
    }
}

/// Seeded jitter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JitterConfig {
    pub seed: u64,
    /// Peak per-axis displacement, body units
    pub amplitude: f64,
}

fn finite(name: &str, value: f64) -> MotionResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MotionError::InvalidConfig(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

fn non_negative(name: &str, value: f64) -> MotionResult<()> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(MotionError::InvalidConfig(format!(
            "{} must not be negative, got {}",
            name, value
        )));
    }
    Ok(())
}

fn positive(name: &str, value: f64) -> MotionResult<()> {
    finite(name, value)?;
    if value <= 0.0 {
        return Err(MotionError::InvalidConfig(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}
