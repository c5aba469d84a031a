//! Sibling checkout error types.

use crate::pr_info::PrInfoError;
use crate::process::ProcessError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while checking out a sibling repository.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The sibling PR's base branch could not be loaded.
    #[error(transparent)]
    PrInfo(#[from] PrInfoError),

    /// One of the checkout commands failed.
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// The checkout directory cannot be passed on as a mirror URL.
    #[error("Checkout directory {} is not valid UTF-8", .path.display())]
    NonUtf8Path { path: PathBuf },
}
