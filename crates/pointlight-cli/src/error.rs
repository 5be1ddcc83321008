//! CLI error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use pointlight_core::MotionError;

/// Everything that can stop the CLI
#[derive(Error, Debug)]
pub enum CliError {
    // Input errors (exit code 2)
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Motion(#[from] MotionError),

    #[error("cannot read config {path:?}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("invalid config {path:?}: {source}")]
    ConfigFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Runtime errors (exit code 1)
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),

    #[error("cannot serialize frame: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }

    /// Error kind printed in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Usage(_) => "Usage",
            CliError::Motion(e) => e.kind(),
            CliError::ConfigRead { .. } => "ConfigRead",
            CliError::ConfigFormat { .. } => "ConfigFormat",
            CliError::Output(_) => "Output",
            CliError::Serialize(_) => "Serialize",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_)
            | CliError::Motion(_)
            | CliError::ConfigRead { .. }
            | CliError::ConfigFormat { .. } => 2,
            CliError::Output(_) | CliError::Serialize(_) => 1,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
