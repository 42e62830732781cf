//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: pick error (nothing under the point, no color found, point outside snapshot)
//! - 11: I/O error (unreadable scene file, surface capture failure)
//! - 12: input error (bad scene JSON, bad color string, bad --config JSON)
//! - 13: serialization error

use oklch_picker_core::PickError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// The pick ran but produced no color.
    Pick(PickError),
    /// An I/O error (reading a file, capturing the surface).
    Io(String),
    /// A user input error (malformed scene, color or config).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Pick(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Pick(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<PickError> for CliError {
    fn from(e: PickError) -> Self {
        match e {
            PickError::SurfaceCaptureUnavailable(_) => CliError::Io(e.to_string()),
            PickError::InvalidScene(_)
            | PickError::UnparsableColor(_)
            | PickError::InvalidDimensions
            | PickError::BufferSizeMismatch { .. } => CliError::Input(e.to_string()),
            other => CliError::Pick(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
