//! Stimulus Matrix - every action × weight × affect condition
//!
//! Experiments present each action under each modulation; the matrix
//! enumerates those conditions in a fixed order so runs are repeatable.

use std::fmt;

use pointlight_core::{ActionKind, Affect, WeightClass};
use pointlight_motion::ModulationParams;

/// One experimental condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Condition {
    pub action: ActionKind,
    pub weight: WeightClass,
    pub affect: Affect,
}

impl Condition {
    pub fn new(action: ActionKind, weight: WeightClass, affect: Affect) -> Self {
        Condition {
            action,
            weight,
            affect,
        }
    }

    pub fn mods(&self) -> ModulationParams {
        ModulationParams::resolve(self.weight, self.affect)
    }

    /// Stable identifier, e.g. `walking/heavy/sad`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.action, self.weight, self.affect)
    }
}

/// Ordered set of conditions
#[derive(Debug, Clone, PartialEq)]
pub struct StimulusMatrix {
    conditions: Vec<Condition>,
}

impl StimulusMatrix {
    /// All 10 × 2 × 2 conditions, action-major
    pub fn full() -> Self {
        Self::for_actions(&ActionKind::ALL)
    }

    /// Every weight/affect pairing for the given actions
    pub fn for_actions(actions: &[ActionKind]) -> Self {
        let mut conditions = Vec::with_capacity(actions.len() * 4);
        for &action in actions {
            for weight in WeightClass::ALL {
                for affect in Affect::ALL {
                    conditions.push(Condition::new(action, weight, affect));
                }
            }
        }
        StimulusMatrix { conditions }
    }

    /// Keep only conditions matching `keep`
    pub fn filter(self, keep: impl Fn(&Condition) -> bool) -> Self {
        StimulusMatrix {
            conditions: self.conditions.into_iter().filter(|c| keep(c)).collect(),
        }
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.iter()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl Default for StimulusMatrix {
    fn default() -> Self {
        Self::full()
    }
}

impl<'a> IntoIterator for &'a StimulusMatrix {
    type Item = &'a Condition;
    type IntoIter = std::slice::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_full_matrix_covers_every_condition() {
        let matrix = StimulusMatrix::full();
        assert_eq!(matrix.len(), 40);
        let unique: HashSet<Condition> = matrix.iter().copied().collect();
        assert_eq!(unique.len(), 40);
    }

    #[test]
    fn test_order_is_action_major() {
        let matrix = StimulusMatrix::full();
        let first = matrix.conditions()[0];
        assert_eq!(first.label(), "walking/light/happy");
        assert_eq!(matrix.conditions()[3].label(), "walking/heavy/sad");
        assert_eq!(matrix.conditions()[4].action, ActionKind::Running);
    }

    #[test]
    fn test_filter() {
        let sad = StimulusMatrix::full().filter(|c| c.affect == Affect::Sad);
        assert_eq!(sad.len(), 20);
        assert!(sad.iter().all(|c| c.mods().phase_lag > 0.0));
    }
}
