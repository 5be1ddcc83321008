//! Action identities and their duration semantics

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MotionError;

/// Closed set of actions the engine can synthesize
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Walking,
    Running,
    JumpingUp,
    JumpingForward,
    Bowing,
    SittingDown,
    LyingDown,
    TurningAround,
    WavingAHand,
    ForwardRolling,
}

impl ActionKind {
    /// Every action, in listing order
    pub const ALL: [ActionKind; 10] = [
        ActionKind::Walking,
        ActionKind::Running,
        ActionKind::JumpingUp,
        ActionKind::JumpingForward,
        ActionKind::Bowing,
        ActionKind::SittingDown,
        ActionKind::LyingDown,
        ActionKind::TurningAround,
        ActionKind::WavingAHand,
        ActionKind::ForwardRolling,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ActionKind::Walking => "walking",
            ActionKind::Running => "running",
            ActionKind::JumpingUp => "jumping-up",
            ActionKind::JumpingForward => "jumping-forward",
            ActionKind::Bowing => "bowing",
            ActionKind::SittingDown => "sitting-down",
            ActionKind::LyingDown => "lying-down",
            ActionKind::TurningAround => "turning-around",
            ActionKind::WavingAHand => "waving-a-hand",
            ActionKind::ForwardRolling => "forward-rolling",
        }
    }

    /// Duration semantics used unless a configuration overrides them
    pub fn default_semantics(self) -> DurationSemantics {
        match self {
            ActionKind::Walking
            | ActionKind::Running
            | ActionKind::JumpingUp
            | ActionKind::JumpingForward
            | ActionKind::TurningAround
            | ActionKind::WavingAHand => DurationSemantics::Cyclic,
            ActionKind::Bowing
            | ActionKind::SittingDown
            | ActionKind::LyingDown
            | ActionKind::ForwardRolling => DurationSemantics::Transitional,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionKind {
    type Err = MotionError;

    /// Exact, case-sensitive match on the kebab-case name. No aliases and no
    /// fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| MotionError::UnknownAction(s.to_string()))
    }
}

/// How elapsed time maps to phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationSemantics {
    /// Phase wraps in [0, 1)
    Cyclic,
    /// Phase clamps to [0, 1] and holds the end pose
    Transitional,
}

impl fmt::Display for DurationSemantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationSemantics::Cyclic => f.write_str("cyclic"),
            DurationSemantics::Transitional => f.write_str("transitional"),
        }
    }
}

/// Action name plus duration semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionSpec {
    pub kind: ActionKind,
    pub semantics: DurationSemantics,
}

impl ActionSpec {
    pub fn new(kind: ActionKind, semantics: DurationSemantics) -> Self {
        Self { kind, semantics }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_cyclic(&self) -> bool {
        self.semantics == DurationSemantics::Cyclic
    }
}

impl From<ActionKind> for ActionSpec {
    fn from(kind: ActionKind) -> Self {
        ActionSpec::new(kind, kind.default_semantics())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for kind in ActionKind::ALL {
            assert_eq!(kind.name().parse::<ActionKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_action() {
        let err = "moonwalking".parse::<ActionKind>().unwrap_err();
        assert_eq!(err, MotionError::UnknownAction("moonwalking".to_string()));

        // No case folding or alias matching
        assert!("Walking".parse::<ActionKind>().is_err());
        assert!("walk".parse::<ActionKind>().is_err());
    }

    #[test]
    fn test_serde_uses_kebab_names() {
        for kind in ActionKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }

    #[test]
    fn test_default_semantics() {
        assert!(ActionSpec::from(ActionKind::Walking).is_cyclic());
        assert!(!ActionSpec::from(ActionKind::SittingDown).is_cyclic());
        assert_eq!(
            ActionKind::ForwardRolling.default_semantics(),
            DurationSemantics::Transitional
        );
    }
}
