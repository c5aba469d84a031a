//! Reference to a pull request in a sibling repository.

use serde::Serialize;
use std::fmt;

/// Host that cross-repo references are cloned from.
const GITHUB_URL: &str = "https://github.com";

/// A pull request that should be tested together with the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossRepoPr {
    /// Owner of the repository (e.g., "swiftlang").
    pub repository_owner: String,

    /// Name of the repository (e.g., "swift-syntax").
    pub repository_name: String,

    /// The referenced PR number.
    pub pr_number: String,
}

impl CrossRepoPr {
    /// Creates a reference from its parts.
    pub fn new(
        repository_owner: impl Into<String>,
        repository_name: impl Into<String>,
        pr_number: impl Into<String>,
    ) -> Self {
        Self {
            repository_owner: repository_owner.into(),
            repository_name: repository_name.into(),
            pr_number: pr_number.into(),
        }
    }

    /// Full repository name in "owner/name" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.repository_owner, self.repository_name)
    }

    /// Canonical clone URL, also used as the package URL of the mirror.
    #[must_use]
    pub fn clone_url(&self) -> String {
        format!(
            "{GITHUB_URL}/{}/{}.git",
            self.repository_owner, self.repository_name
        )
    }
}

impl fmt::Display for CrossRepoPr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}#{}",
            self.repository_owner, self.repository_name, self.pr_number
        )
    }
}
