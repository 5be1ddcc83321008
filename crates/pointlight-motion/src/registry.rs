//! Action Generator Registry
//!
//! Total mapping from `ActionKind` to a generator, checked for
//! completeness when it is built. Name lookup never falls back to another
//! action.

use pointlight_core::{ActionKind, ActionSpec, MotionError, MotionResult};

use crate::generators::{
    ActionGenerator, BowGenerator, GaitGenerator, JumpGenerator, PostureBlendGenerator,
    RollGenerator, TurnGenerator, WaveGenerator,
};
use crate::{GeneratorConfig, ModulationParams, Pose, Skeleton};

/// One generator per action, indexed by `ActionKind`
#[derive(Debug)]
pub struct Registry {
    generators: Vec<Box<dyn ActionGenerator>>,
}

impl Registry {
    /// Build the standard generator set from configuration
    pub fn new(config: &GeneratorConfig) -> MotionResult<Self> {
        Self::from_generators(vec![
            Box::new(GaitGenerator::walking(config.walking.clone())),
            Box::new(GaitGenerator::running(config.running.clone())),
            Box::new(JumpGenerator::up(config.jump.clone())),
            Box::new(JumpGenerator::forward(config.jump.clone())),
            Box::new(BowGenerator::new(config.bow.clone())),
            Box::new(PostureBlendGenerator::sitting()),
            Box::new(PostureBlendGenerator::lying()),
            Box::new(TurnGenerator::new(config.turn.clone())),
            Box::new(WaveGenerator::new(config.wave.clone())),
            Box::new(RollGenerator::new(config.roll.clone())),
        ])
    }

    /// Build from an arbitrary generator set. Every action needs exactly
    /// one generator.
    pub fn from_generators(generators: Vec<Box<dyn ActionGenerator>>) -> MotionResult<Self> {
        let mut slots: Vec<Option<Box<dyn ActionGenerator>>> =
            ActionKind::ALL.iter().map(|_| None).collect();

        for generator in generators {
            let kind = generator.kind();
            let slot = &mut slots[kind as usize];
            if slot.is_some() {
                return Err(MotionError::InvalidConfig(format!(
                    "duplicate generator for action {}",
                    kind
                )));
            }
            *slot = Some(generator);
        }

        let mut ordered = Vec::with_capacity(slots.len());
        for (kind, slot) in ActionKind::ALL.iter().zip(slots) {
            match slot {
                Some(generator) => ordered.push(generator),
                None => return Err(MotionError::IncompleteRegistry(*kind)),
            }
        }

        tracing::debug!(actions = ordered.len(), "generator registry built");
        Ok(Registry {
            generators: ordered,
        })
    }

    pub fn get(&self, kind: ActionKind) -> &dyn ActionGenerator {
        self.generators[kind as usize].as_ref()
    }

    /// Parse an action name; unknown names are an error, never a default
    pub fn lookup(&self, name: &str) -> MotionResult<&dyn ActionGenerator> {
        let kind = name.parse::<ActionKind>().map_err(|e| {
            tracing::warn!(action = name, "unknown action requested");
            e
        })?;
        Ok(self.get(kind))
    }

    pub fn spec(&self, kind: ActionKind) -> ActionSpec {
        self.get(kind).spec()
    }

    /// Every action with the semantics its generator uses, in listing order
    pub fn specs(&self) -> Vec<ActionSpec> {
        self.generators.iter().map(|g| g.spec()).collect()
    }

    pub fn generate(
        &self,
        kind: ActionKind,
        phase: f64,
        mods: &ModulationParams,
        skeleton: &Skeleton,
    ) -> Pose {
        self.get(kind).generate(phase, mods, skeleton)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointlight_core::DurationSemantics;

    use crate::{TurnExtent, TurnParams};

    #[test]
    fn test_registry_is_complete() {
        let registry = Registry::new(&GeneratorConfig::default()).unwrap();
        assert_eq!(registry.len(), ActionKind::ALL.len());
        for kind in ActionKind::ALL {
            assert_eq!(registry.get(kind).kind(), kind);
        }
    }

    #[test]
    fn test_lookup_unknown_action() {
        let registry = Registry::new(&GeneratorConfig::default()).unwrap();
        assert_eq!(
            registry.lookup("moonwalking").unwrap_err(),
            MotionError::UnknownAction("moonwalking".to_string())
        );
        assert_eq!(
            registry.lookup("waving-a-hand").unwrap().kind(),
            ActionKind::WavingAHand
        );
    }

    #[test]
    fn test_missing_generator_detected() {
        let result = Registry::from_generators(vec![
            Box::new(GaitGenerator::walking(crate::GaitParams::walking())),
            Box::new(PostureBlendGenerator::sitting()),
        ]);
        assert_eq!(
            result.unwrap_err(),
            MotionError::IncompleteRegistry(ActionKind::Running)
        );
    }

    #[test]
    fn test_duplicate_generator_rejected() {
        let config = GeneratorConfig::default();
        let mut generators: Vec<Box<dyn ActionGenerator>> = Vec::new();
        generators.push(Box::new(PostureBlendGenerator::sitting()));
        generators.push(Box::new(PostureBlendGenerator::sitting()));
        generators.push(Box::new(WaveGenerator::new(config.wave)));
        assert!(matches!(
            Registry::from_generators(generators),
            Err(MotionError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_specs_follow_turn_extent() {
        let full = Registry::new(&GeneratorConfig::default()).unwrap();
        assert_eq!(
            full.spec(ActionKind::TurningAround).semantics,
            DurationSemantics::Cyclic
        );

        let config = GeneratorConfig {
            turn: TurnParams {
                extent: TurnExtent::Half,
                ..TurnParams::default()
            },
            ..GeneratorConfig::default()
        };
        let half = Registry::new(&config).unwrap();
        assert_eq!(
            half.spec(ActionKind::TurningAround).semantics,
            DurationSemantics::Transitional
        );
        let kinds: Vec<ActionKind> = half.specs().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, ActionKind::ALL.to_vec());
    }
}
