//! Pose Assembler - the engine's public entry point
//!
//! `MotionEngine` owns the skeleton, the generator registry, the phase
//! clock and the noise source. All of them are immutable after
//! construction; the engine is `Send + Sync` and every query is a pure
//! function of its arguments.

use pointlight_core::{ActionKind, ActionSpec, MotionResult};
use pointlight_time::{FrameClock, Phase, PhaseClock};

use crate::{
    EngineConfig, Frame, ModulationParams, NoJitter, NoiseSource, Pose, Registry, SeededJitter,
    Skeleton,
};

/// Kinematic synthesis engine
#[derive(Debug)]
pub struct MotionEngine {
    skeleton: Skeleton,
    registry: Registry,
    clock: PhaseClock,
    noise: Box<dyn NoiseSource>,
}

impl MotionEngine {
    /// Engine with default configuration
    pub fn new() -> MotionResult<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Validate the configuration and build every component
    pub fn with_config(config: EngineConfig) -> MotionResult<Self> {
        config.validate()?;

        let registry = Registry::new(&config.generators)?;
        let noise: Box<dyn NoiseSource> = match &config.jitter {
            Some(jitter) => Box::new(SeededJitter::from(jitter)),
            None => Box::new(NoJitter),
        };

        tracing::info!(
            actions = registry.len(),
            jitter = config.jitter.is_some(),
            "motion engine built"
        );

        Ok(MotionEngine {
            skeleton: Skeleton::new(),
            registry,
            clock: PhaseClock::new(config.timing),
            noise,
        })
    }

    /// Replace the noise source
    pub fn with_noise(mut self, noise: impl NoiseSource + 'static) -> Self {
        self.noise = Box::new(noise);
        self
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Every supported action with its duration semantics
    pub fn list_actions(&self) -> Vec<ActionSpec> {
        self.registry.specs()
    }

    pub fn spec(&self, kind: ActionKind) -> ActionSpec {
        self.registry.spec(kind)
    }

    /// Parse and resolve modulation traits; see [`crate::make_modulation`]
    pub fn make_modulation(&self, weight: &str, affect: &str) -> MotionResult<ModulationParams> {
        crate::make_modulation(weight, affect)
    }

    /// Configured period (cyclic) or duration (transitional), seconds
    pub fn base_period(&self, kind: ActionKind) -> f64 {
        self.clock.period(&self.spec(kind))
    }

    /// Period or duration after the modulation's tempo is applied
    pub fn period_of(&self, kind: ActionKind, mods: &ModulationParams) -> f64 {
        self.clock
            .effective_period(&self.spec(kind), mods.frequency_scale)
    }

    pub fn phase_at(&self, kind: ActionKind, t: f64, mods: &ModulationParams) -> Phase {
        self.clock
            .resolve_at_tempo(&self.spec(kind), t, mods.frequency_scale)
    }

    /// Pose of the named action at elapsed time `t` (seconds)
    pub fn pose_at(&self, action: &str, t: f64, mods: &ModulationParams) -> MotionResult<Pose> {
        let kind = self.registry.lookup(action)?.kind();
        Ok(self.pose_for(kind, t, mods))
    }

    /// Typed variant of [`MotionEngine::pose_at`]; total
    pub fn pose_for(&self, kind: ActionKind, t: f64, mods: &ModulationParams) -> Pose {
        let phase = self.phase_at(kind, t, mods).value();
        self.pose_at_phase(kind, phase, mods)
    }

    /// Pose at an explicit phase: rest ⊕ generator offset ⊕ jitter
    pub fn pose_at_phase(&self, kind: ActionKind, phase: f64, mods: &ModulationParams) -> Pose {
        let offset = self
            .registry
            .generate(kind, phase, mods, &self.skeleton);
        let jitter = self.noise.jitter_pose(phase);
        tracing::trace!(action = %kind, phase, "pose assembled");
        self.skeleton
            .rest_pose()
            .offset_by(&offset)
            .offset_by(&jitter)
    }

    /// Frame `index` of the named action at `fps`
    pub fn frame_at(
        &self,
        action: &str,
        index: u64,
        fps: f64,
        mods: &ModulationParams,
    ) -> MotionResult<Frame> {
        let kind = self.registry.lookup(action)?.kind();
        let time = FrameClock::new(fps).time_of(index);
        Ok(self.frame_for(kind, index, time, mods))
    }

    /// `count` consecutive frames starting at frame 0
    pub fn frames(
        &self,
        action: &str,
        fps: f64,
        count: u64,
        mods: &ModulationParams,
    ) -> MotionResult<Frames<'_>> {
        let kind = self.registry.lookup(action)?.kind();
        Ok(Frames {
            engine: self,
            kind,
            mods: *mods,
            clock: FrameClock::new(fps),
            end: count,
        })
    }

    fn frame_for(&self, kind: ActionKind, index: u64, time: f64, mods: &ModulationParams) -> Frame {
        let phase = self.phase_at(kind, time, mods).value();
        Frame {
            index,
            time,
            phase,
            action: kind,
            pose: self.pose_at_phase(kind, phase, mods),
        }
    }
}

/// Iterator over a contiguous frame range, driven by a [`FrameClock`]
#[derive(Debug)]
pub struct Frames<'a> {
    engine: &'a MotionEngine,
    kind: ActionKind,
    mods: ModulationParams,
    clock: FrameClock,
    end: u64,
}

impl<'a> Frames<'a> {
    /// Continue from another frame (scrubbing)
    pub fn seek(mut self, index: u64) -> Self {
        self.clock.seek(index);
        self
    }
}

impl<'a> Iterator for Frames<'a> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.clock.index() >= self.end {
            return None;
        }
        let (index, time) = self.clock.tick();
        Some(self.engine.frame_for(self.kind, index, time, &self.mods))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end.saturating_sub(self.clock.index()) as usize;
        (left, Some(left))
    }
}
