//! Subprocess error types.

use thiserror::Error;

/// Errors that can occur while running a subprocess.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The process could not be started.
    #[error("Failed to launch {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process exited with a non-zero status.
    #[error("{command} failed with non-zero exit code: {code}")]
    NonZeroExit { command: String, code: i32 },

    /// The process was terminated by a signal before exiting.
    #[error("{command} was terminated by signal")]
    Terminated { command: String },
}
