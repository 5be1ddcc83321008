//! Categorical modulation traits: apparent body weight and affect

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MotionError;

/// Apparent body weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightClass {
    Light,
    Heavy,
}

/// Emotional tone of the movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Affect {
    Happy,
    Sad,
}

impl WeightClass {
    pub const ALL: [WeightClass; 2] = [WeightClass::Light, WeightClass::Heavy];

    pub fn name(self) -> &'static str {
        match self {
            WeightClass::Light => "light",
            WeightClass::Heavy => "heavy",
        }
    }
}

impl Affect {
    pub const ALL: [Affect; 2] = [Affect::Happy, Affect::Sad];

    pub fn name(self) -> &'static str {
        match self {
            Affect::Happy => "happy",
            Affect::Sad => "sad",
        }
    }
}

impl FromStr for WeightClass {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(WeightClass::Light),
            "heavy" => Ok(WeightClass::Heavy),
            other => Err(MotionError::InvalidModulation {
                field: "weight",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for Affect {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happy" => Ok(Affect::Happy),
            "sad" => Ok(Affect::Sad),
            other => Err(MotionError::InvalidModulation {
                field: "affect",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Affect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_closed_sets() {
        assert_eq!("light".parse::<WeightClass>(), Ok(WeightClass::Light));
        assert_eq!("heavy".parse::<WeightClass>(), Ok(WeightClass::Heavy));
        assert_eq!("happy".parse::<Affect>(), Ok(Affect::Happy));
        assert_eq!("sad".parse::<Affect>(), Ok(Affect::Sad));
    }

    #[test]
    fn test_parse_rejects_other_values() {
        assert_eq!(
            "medium".parse::<WeightClass>(),
            Err(MotionError::InvalidModulation {
                field: "weight",
                value: "medium".to_string()
            })
        );
        assert!("angry".parse::<Affect>().is_err());
        assert!("Happy".parse::<Affect>().is_err());
    }
}
