//! Frames - a pose stamped with its index, time and phase

use serde::{Deserialize, Serialize};

use pointlight_core::ActionKind;

use crate::Pose;

/// One rendered instant of an action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub index: u64,
    /// Elapsed seconds
    pub time: f64,
    /// Resolved phase of the action
    pub phase: f64,
    pub action: ActionKind,
    pub pose: Pose,
}

impl Frame {
    /// A transitional action has reached its final pose
    pub fn is_complete(&self) -> bool {
        self.phase == 1.0
    }
}
