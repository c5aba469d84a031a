//! Runner configuration.

use std::path::{Path, PathBuf};
use url::Url;

/// Build tool that owns the mirror configuration by default.
pub const DEFAULT_BUILD_TOOL: &str = "swift";

/// Configuration for a cross-repo checkout run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Repository of the PR under test, in "owner/name" format.
    repository: String,
    /// Number of the PR under test.
    pr_number: String,
    /// Base URL of the GitHub REST API.
    api_url: Url,
    /// Directory siblings are cloned into; `None` means the parent of the
    /// current directory.
    workspace_dir: Option<PathBuf>,
    /// Name of the build tool used to register mirrors.
    build_tool: String,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(repository: impl Into<String>, pr_number: impl Into<String>, api_url: Url) -> Self {
        Self {
            repository: repository.into(),
            pr_number: pr_number.into(),
            api_url,
            workspace_dir: None,
            build_tool: DEFAULT_BUILD_TOOL.to_string(),
        }
    }

    /// Sets the directory siblings are cloned into.
    #[must_use]
    pub fn with_workspace_dir(mut self, workspace_dir: PathBuf) -> Self {
        self.workspace_dir = Some(workspace_dir);
        self
    }

    /// Sets the build tool used to register mirrors.
    #[must_use]
    pub fn with_build_tool(mut self, build_tool: impl Into<String>) -> Self {
        self.build_tool = build_tool.into();
        self
    }

    /// Returns the repository of the PR under test.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Returns the number of the PR under test.
    pub fn pr_number(&self) -> &str {
        &self.pr_number
    }

    /// Returns the API base URL.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Returns the configured workspace directory, if any.
    pub fn workspace_dir(&self) -> Option<&Path> {
        self.workspace_dir.as_deref()
    }

    /// Returns the build tool name.
    pub fn build_tool(&self) -> &str {
        &self.build_tool
    }
}
