//! Runner error types.

/// Errors that can occur during a checkout run.
///
/// Every variant is fatal; callers report the message and exit.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Loading PR info failed.
    #[error(transparent)]
    PrInfo(#[from] crate::pr_info::PrInfoError),

    /// A required executable is missing.
    #[error(transparent)]
    Locate(#[from] crate::executables::LocateError),

    /// Checking out a sibling failed.
    #[error(transparent)]
    Checkout(#[from] crate::checkout::CheckoutError),

    /// The workspace directory could not be determined.
    #[error("Failed to determine workspace directory: {message}")]
    Workspace { message: String },
}
