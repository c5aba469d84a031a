//! PR info error types.

use std::error::Error as _;
use thiserror::Error;

/// Errors that can occur while loading pull request information.
#[derive(Debug, Error)]
pub enum PrInfoError {
    /// The API URL could not be formed from the inputs.
    #[error("Failed to form URL for GitHub API: {message}")]
    InvalidUrl { message: String },

    /// The GitHub client could not be built.
    #[error("Failed to create GitHub client: {}", describe(.0))]
    Client(#[source] octocrab::Error),

    /// The request failed, returned a non-success status, or could not be decoded.
    #[error("Failed to load PR info from {url}: {}", describe(.source))]
    Request {
        url: String,
        #[source]
        source: octocrab::Error,
    },
}

/// Single-line description of an octocrab error.
///
/// octocrab's own `Display` appends a captured backtrace, so the message is
/// built from the API error or from the chain of underlying causes instead.
fn describe(error: &octocrab::Error) -> String {
    if let octocrab::Error::GitHub { source, .. } = error {
        return format!("{} (HTTP {})", source.message, source.status_code.as_u16());
    }

    let mut causes = Vec::new();
    let mut cause = error.source();
    while let Some(inner) = cause {
        causes.push(first_line(&inner.to_string()).to_string());
        cause = inner.source();
    }

    if causes.is_empty() {
        first_line(&error.to_string()).to_string()
    } else {
        causes.join(": ")
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}
