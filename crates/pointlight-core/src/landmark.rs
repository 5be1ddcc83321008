//! Landmark identities - the 15 dots of a point-light figure
//!
//! The declaration order is the canonical output order of every pose.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of landmarks in the figure
pub const LANDMARK_COUNT: usize = 15;

/// Tracked body location
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Landmark {
    // Head
    Head,
    Neck,

    // Arms
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,

    // Torso
    Pelvis,

    // Legs
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

/// Which side of the body midline a landmark sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Center,
}

impl Landmark {
    /// All landmarks in canonical order
    pub const ALL: [Landmark; LANDMARK_COUNT] = [
        Landmark::Head,
        Landmark::Neck,
        Landmark::LeftShoulder,
        Landmark::RightShoulder,
        Landmark::LeftElbow,
        Landmark::RightElbow,
        Landmark::LeftWrist,
        Landmark::RightWrist,
        Landmark::Pelvis,
        Landmark::LeftHip,
        Landmark::RightHip,
        Landmark::LeftKnee,
        Landmark::RightKnee,
        Landmark::LeftAnkle,
        Landmark::RightAnkle,
    ];

    /// Canonical index (position in [`Landmark::ALL`])
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Landmark> {
        Landmark::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Landmark::Head => "head",
            Landmark::Neck => "neck",
            Landmark::LeftShoulder => "left-shoulder",
            Landmark::RightShoulder => "right-shoulder",
            Landmark::LeftElbow => "left-elbow",
            Landmark::RightElbow => "right-elbow",
            Landmark::LeftWrist => "left-wrist",
            Landmark::RightWrist => "right-wrist",
            Landmark::Pelvis => "pelvis",
            Landmark::LeftHip => "left-hip",
            Landmark::RightHip => "right-hip",
            Landmark::LeftKnee => "left-knee",
            Landmark::RightKnee => "right-knee",
            Landmark::LeftAnkle => "left-ankle",
            Landmark::RightAnkle => "right-ankle",
        }
    }

    pub fn side(self) -> Side {
        match self {
            Landmark::LeftShoulder
            | Landmark::LeftElbow
            | Landmark::LeftWrist
            | Landmark::LeftHip
            | Landmark::LeftKnee
            | Landmark::LeftAnkle => Side::Left,
            Landmark::RightShoulder
            | Landmark::RightElbow
            | Landmark::RightWrist
            | Landmark::RightHip
            | Landmark::RightKnee
            | Landmark::RightAnkle => Side::Right,
            Landmark::Head | Landmark::Neck | Landmark::Pelvis => Side::Center,
        }
    }

    /// Landmark on the opposite side (center landmarks map to themselves)
    pub fn mirror(self) -> Landmark {
        match self {
            Landmark::LeftShoulder => Landmark::RightShoulder,
            Landmark::RightShoulder => Landmark::LeftShoulder,
            Landmark::LeftElbow => Landmark::RightElbow,
            Landmark::RightElbow => Landmark::LeftElbow,
            Landmark::LeftWrist => Landmark::RightWrist,
            Landmark::RightWrist => Landmark::LeftWrist,
            Landmark::LeftHip => Landmark::RightHip,
            Landmark::RightHip => Landmark::LeftHip,
            Landmark::LeftKnee => Landmark::RightKnee,
            Landmark::RightKnee => Landmark::LeftKnee,
            Landmark::LeftAnkle => Landmark::RightAnkle,
            Landmark::RightAnkle => Landmark::LeftAnkle,
            center => center,
        }
    }

    /// Upper-body landmarks carried by a bow (everything above the pelvis)
    pub fn is_upper_body(self) -> bool {
        matches!(
            self,
            Landmark::Head
                | Landmark::Neck
                | Landmark::LeftShoulder
                | Landmark::RightShoulder
                | Landmark::LeftElbow
                | Landmark::RightElbow
                | Landmark::LeftWrist
                | Landmark::RightWrist
        )
    }

    /// Distal limb landmarks (elbows, wrists, knees, ankles)
    pub fn is_distal(self) -> bool {
        matches!(
            self,
            Landmark::LeftElbow
                | Landmark::RightElbow
                | Landmark::LeftWrist
                | Landmark::RightWrist
                | Landmark::LeftKnee
                | Landmark::RightKnee
                | Landmark::LeftAnkle
                | Landmark::RightAnkle
        )
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_matches_index() {
        assert_eq!(Landmark::ALL.len(), LANDMARK_COUNT);
        for (i, landmark) in Landmark::ALL.iter().enumerate() {
            assert_eq!(landmark.index(), i);
            assert_eq!(Landmark::from_index(i), Some(*landmark));
        }
        assert_eq!(Landmark::from_index(LANDMARK_COUNT), None);
    }

    #[test]
    fn test_mirror_is_involution() {
        for landmark in Landmark::ALL {
            assert_eq!(landmark.mirror().mirror(), landmark);
            match landmark.side() {
                Side::Center => assert_eq!(landmark.mirror(), landmark),
                Side::Left => assert_eq!(landmark.mirror().side(), Side::Right),
                Side::Right => assert_eq!(landmark.mirror().side(), Side::Left),
            }
        }
    }
}
