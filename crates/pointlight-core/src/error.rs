//! Error types for the pointlight engine

use thiserror::Error;

use crate::ActionKind;

/// Core pointlight errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    // Lookup errors
    #[error("Unknown action: {0:?}")]
    UnknownAction(String),

    // Modulation errors
    #[error("Invalid modulation: {field} = {value:?}")]
    InvalidModulation { field: &'static str, value: String },

    // Construction errors
    #[error("Registry has no generator for action {0}")]
    IncompleteRegistry(ActionKind),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MotionError {
    /// Short, stable name of the error kind (for CLI diagnostics)
    pub fn kind(&self) -> &'static str {
        match self {
            MotionError::UnknownAction(_) => "UnknownAction",
            MotionError::InvalidModulation { .. } => "InvalidModulation",
            MotionError::IncompleteRegistry(_) => "IncompleteRegistry",
            MotionError::InvalidConfig(_) => "InvalidConfig",
        }
    }
}

/// Result type for pointlight operations
pub type MotionResult<T> = Result<T, MotionError>;
