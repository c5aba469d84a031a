//! Orchestrates a cross-repo checkout run.

mod config;
mod error;

pub use config::{RunnerConfig, DEFAULT_BUILD_TOOL};
pub use error::RunnerError;

use crate::checkout::{check_out_sibling, SiblingCheckout, Toolchain};
use crate::executables::{ExecutableLocator, SearchPathLocator};
use crate::linked_prs::{scan_linked_prs, CrossRepoPr};
use crate::pr_info::{GitHubPrInfo, PrInfoSource};
use crate::process::{ProcessLauncher, SystemLauncher};
use std::path::{Path, PathBuf};
use tracing::info;

/// Runs the checkout of every PR linked from the PR under test.
pub struct Runner {
    config: RunnerConfig,
    source: Box<dyn PrInfoSource>,
    locator: Box<dyn ExecutableLocator>,
    launcher: Box<dyn ProcessLauncher>,
}

impl Runner {
    /// Builds a runner that talks to GitHub and runs real processes.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::PrInfo`] if the GitHub client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let source = GitHubPrInfo::new(config.api_url().clone())?;
        Ok(Self::with_collaborators(
            config,
            Box::new(source),
            Box::new(SearchPathLocator::from_env()),
            Box::new(SystemLauncher),
        ))
    }

    /// Builds a runner from explicit collaborators.
    pub fn with_collaborators(
        config: RunnerConfig,
        source: Box<dyn PrInfoSource>,
        locator: Box<dyn ExecutableLocator>,
        launcher: Box<dyn ProcessLauncher>,
    ) -> Self {
        Self {
            config,
            source,
            locator,
            launcher,
        }
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Executes the full flow and returns the siblings that were checked out.
    ///
    /// Stops at the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if any lookup or command fails.
    pub async fn run(&self) -> Result<Vec<SiblingCheckout>, RunnerError> {
        let linked_prs = self.linked_prs().await?;
        if linked_prs.is_empty() {
            info!("No linked PRs found");
            return Ok(Vec::new());
        }
        print_linked_prs(&linked_prs);

        let toolchain = Toolchain::resolve(self.locator.as_ref(), self.config.build_tool())?;
        let workspace_dir = self.workspace_dir()?;
        info!(
            count = linked_prs.len(),
            workspace = %workspace_dir.display(),
            "Checking out linked PRs"
        );

        let mut checkouts = Vec::with_capacity(linked_prs.len());
        for pr in &linked_prs {
            let checkout = check_out_sibling(
                self.source.as_ref(),
                self.launcher.as_ref(),
                &toolchain,
                &workspace_dir,
                pr,
            )
            .await?;
            checkouts.push(checkout);
        }

        Ok(checkouts)
    }

    /// Loads the PR under test and scans its body for linked PRs.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::PrInfo`] if the PR cannot be loaded.
    pub async fn linked_prs(&self) -> Result<Vec<CrossRepoPr>, RunnerError> {
        info!(
            repository = %self.config.repository(),
            pr_number = %self.config.pr_number(),
            "Scanning PR for linked PRs"
        );
        let pr_info = self
            .source
            .pr_info(self.config.repository(), self.config.pr_number())
            .await?;
        Ok(scan_linked_prs(pr_info.body.as_deref()))
    }

    /// Resolves the directory siblings are cloned into.
    fn workspace_dir(&self) -> Result<PathBuf, RunnerError> {
        if let Some(dir) = self.config.workspace_dir() {
            return Ok(dir.to_path_buf());
        }

        let cwd = std::env::current_dir().map_err(|e| RunnerError::Workspace {
            message: format!("cannot read current directory: {e}"),
        })?;
        Ok(parent_or_self(&cwd))
    }
}

/// Returns the parent of `dir`, or `dir` itself for a filesystem root.
fn parent_or_self(dir: &Path) -> PathBuf {
    dir.parent().unwrap_or(dir).to_path_buf()
}

/// Prints the detected linked PRs.
fn print_linked_prs(linked_prs: &[CrossRepoPr]) {
    println!("Detected cross-repo PRs");
    for pr in linked_prs {
        println!(" - {pr}");
    }
}
