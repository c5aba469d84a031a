//! Pull request information returned by the GitHub API.

use serde::Deserialize;

/// The fields of `GET /repos/{owner}/{repo}/pulls/{number}` that we use.
///
/// All other fields of the response are ignored during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PrInfo {
    /// The branch the PR targets.
    pub base: BaseRef,

    /// The PR's description, `null` when the author left it empty.
    pub body: Option<String>,
}

/// The `base` object of a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BaseRef {
    /// Name of the base branch (e.g., "main").
    #[serde(rename = "ref")]
    pub name: String,
}

impl PrInfo {
    /// Creates PR info from a base branch name and an optional body.
    pub fn new(base_branch: impl Into<String>, body: Option<String>) -> Self {
        Self {
            base: BaseRef {
                name: base_branch.into(),
            },
            body,
        }
    }

    /// Returns the name of the PR's base branch.
    #[must_use]
    pub fn base_branch(&self) -> &str {
        &self.base.name
    }
}
