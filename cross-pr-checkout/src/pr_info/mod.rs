//! Pull request lookups against the GitHub REST API.
//!
//! Requests are anonymous: no token is sent and rate limits are not handled
//! beyond reporting the resulting error.

mod error;
mod info;

pub use error::PrInfoError;
pub use info::{BaseRef, PrInfo};

use async_trait::async_trait;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use tracing::{debug, info_span, Instrument};
use url::Url;

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// A source of pull request information.
#[async_trait]
pub trait PrInfoSource: Send + Sync {
    /// Loads information about PR `pr_number` in `repository` (`owner/name`).
    async fn pr_info(&self, repository: &str, pr_number: &str) -> Result<PrInfo, PrInfoError>;
}

/// [`PrInfoSource`] backed by the GitHub REST API.
pub struct GitHubPrInfo {
    octocrab: Octocrab,
    api_url: Url,
}

impl GitHubPrInfo {
    /// Builds an anonymous client for the API at `api_url`.
    ///
    /// Each lookup is a single request; failed requests are not retried.
    ///
    /// # Errors
    ///
    /// Returns [`PrInfoError::Client`] if the HTTP client cannot be built.
    pub fn new(api_url: Url) -> Result<Self, PrInfoError> {
        let octocrab = Octocrab::builder()
            .base_uri(api_url.as_str())
            .map_err(PrInfoError::Client)?
            .add_retry_config(RetryConfig::None)
            .build()
            .map_err(PrInfoError::Client)?;
        Ok(Self { octocrab, api_url })
    }

    /// Returns the API base URL requests are made against.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

#[async_trait]
impl PrInfoSource for GitHubPrInfo {
    async fn pr_info(&self, repository: &str, pr_number: &str) -> Result<PrInfo, PrInfoError> {
        let url = pull_request_url(&self.api_url, repository, pr_number)?;
        let span = info_span!("pr_info", %repository, %pr_number);

        async {
            debug!(url = %url, "Fetching PR info");
            let info: PrInfo = self
                .octocrab
                .get(url.as_str(), None::<&()>)
                .await
                .map_err(|source| PrInfoError::Request {
                    url: url.to_string(),
                    source,
                })?;
            debug!(base = %info.base_branch(), has_body = info.body.is_some(), "Fetched PR info");
            Ok(info)
        }
        .instrument(span)
        .await
    }
}

/// Forms `<api_url>/repos/<owner>/<name>/pulls/<number>`.
///
/// `repository` must be `owner/name` with both parts non-empty and
/// `pr_number` must be a decimal number.
///
/// # Errors
///
/// Returns [`PrInfoError::InvalidUrl`] if the inputs do not form a valid URL.
pub fn pull_request_url(api_url: &Url, repository: &str, pr_number: &str) -> Result<Url, PrInfoError> {
    let valid_repository = matches!(
        repository.split_once('/'),
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/')
    );
    if !valid_repository {
        return Err(PrInfoError::InvalidUrl {
            message: format!("repository '{repository}' is not of the form 'owner/name'"),
        });
    }
    if pr_number.is_empty() || !pr_number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PrInfoError::InvalidUrl {
            message: format!("PR number '{pr_number}' is not a number"),
        });
    }

    // Url::join drops the last path segment unless the base ends with '/'.
    let mut base = api_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(&format!("repos/{repository}/pulls/{pr_number}"))
        .map_err(|e| PrInfoError::InvalidUrl {
            message: e.to_string(),
        })
}
