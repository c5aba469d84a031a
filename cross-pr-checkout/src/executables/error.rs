//! Executable lookup error types.

use thiserror::Error;

/// Errors that can occur while locating an executable.
#[derive(Debug, Error)]
pub enum LocateError {
    /// Neither `PATH` nor `Path` is set.
    #[error("Did not find {executable}: no PATH variable is set")]
    NoSearchPath { executable: String },

    /// No search path entry holds an executable with this name.
    #[error("Did not find {executable}")]
    NotFound { executable: String },
}
