//! Error types for the MediScan workspace.
//!
//! Interaction state never fails: the views only guard their inputs and
//! otherwise no-op. Errors come from the edges of the system (configuration
//! files, the file picker, the terminal, snapshot output, and page ids typed
//! by a user).

use thiserror::Error;

/// The unified error type for MediScan.
#[derive(Debug, Error)]
pub enum MediscanError {
    /// A configuration file is missing, unreadable, or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The file picker was handed a path whose metadata cannot be read.
    #[error("file '{path}' is unavailable: {reason}")]
    FileUnavailable { path: String, reason: String },

    /// A page id that does not name one of the five dashboard pages.
    #[error("unknown page '{id}'")]
    UnknownPage { id: String },

    /// The terminal could not be set up, drawn to, or restored.
    #[error("terminal error: {reason}")]
    Terminal { reason: String },

    /// A session snapshot could not be encoded for output.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl From<std::io::Error> for MediscanError {
    fn from(e: std::io::Error) -> Self {
        MediscanError::Terminal {
            reason: e.to_string(),
        }
    }
}

/// Convenience alias used throughout the MediScan crates.
pub type MediscanResult<T> = Result<T, MediscanError>;
