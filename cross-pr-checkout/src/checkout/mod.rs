//! Checking out linked PRs next to the current workspace.
//!
//! Each linked PR is cloned into `<workspace dir>/<repository name>`, reset to
//! the merge of the PR into its base branch, and registered with the build
//! tool as a mirror of the repository's canonical URL. A later build then
//! resolves the dependency from that working copy.

mod error;

pub use error::CheckoutError;

use crate::executables::{ExecutableLocator, LocateError};
use crate::linked_prs::CrossRepoPr;
use crate::pr_info::PrInfoSource;
use crate::process::{run_all, Invocation, ProcessLauncher};
use std::path::{Path, PathBuf};
use tracing::{info, info_span, Instrument};

/// Local branch name the fetched merge commit is stored under.
pub const MERGE_REF_ALIAS: &str = "pr_merge";

/// Executables needed to check out and register siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Path of `git`.
    pub git: PathBuf,
    /// Path of the build tool that owns the mirror configuration.
    pub build_tool: PathBuf,
}

impl Toolchain {
    /// Locates `git` and `build_tool`.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError`] if either executable cannot be found.
    pub fn resolve(locator: &dyn ExecutableLocator, build_tool: &str) -> Result<Self, LocateError> {
        Ok(Self {
            git: locator.locate("git")?,
            build_tool: locator.locate(build_tool)?,
        })
    }
}

/// A linked PR and where it is checked out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingCheckout {
    /// The linked PR.
    pub pr: CrossRepoPr,

    /// Base branch of the linked PR.
    pub base_branch: String,

    /// Directory the sibling is cloned from.
    pub workspace_dir: PathBuf,

    /// Checkout directory, `<workspace_dir>/<repository name>`.
    pub directory: PathBuf,
}

impl SiblingCheckout {
    /// Describes the checkout of `pr` into `workspace_dir`.
    pub fn new(pr: CrossRepoPr, base_branch: impl Into<String>, workspace_dir: &Path) -> Self {
        let directory = workspace_dir.join(&pr.repository_name);
        Self {
            pr,
            base_branch: base_branch.into(),
            workspace_dir: workspace_dir.to_path_buf(),
            directory,
        }
    }

    /// Returns the commands that produce this checkout, in execution order.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NonUtf8Path`] if the checkout directory is not
    /// valid UTF-8.
    pub fn commands(&self, toolchain: &Toolchain) -> Result<Vec<Invocation>, CheckoutError> {
        let mirror_url = self
            .directory
            .to_str()
            .ok_or_else(|| CheckoutError::NonUtf8Path {
                path: self.directory.clone(),
            })?;
        let git = &toolchain.git;
        let clone_url = self.pr.clone_url();
        let merge_ref = format!("pull/{}/merge:{MERGE_REF_ALIAS}", self.pr.pr_number);

        Ok(vec![
            Invocation::new(
                git,
                ["clone", clone_url.as_str(), self.pr.repository_name.as_str()],
            )
            .in_dir(&self.workspace_dir),
            Invocation::new(git, ["fetch", "origin", merge_ref.as_str()]).in_dir(&self.directory),
            Invocation::new(git, ["checkout", self.base_branch.as_str()]).in_dir(&self.directory),
            Invocation::new(git, ["reset", "--hard", MERGE_REF_ALIAS]).in_dir(&self.directory),
            Invocation::new(
                &toolchain.build_tool,
                [
                    "package".to_string(),
                    "config".to_string(),
                    "set-mirror".to_string(),
                    "--package-url".to_string(),
                    clone_url.clone(),
                    "--mirror-url".to_string(),
                    mirror_url.to_string(),
                ],
            ),
        ])
    }
}

/// Checks out `pr` next to the workspace and registers it as a mirror.
///
/// This:
/// 1. Loads the PR's base branch
/// 2. Clones the repository into `<workspace_dir>/<repository name>`
/// 3. Fetches the PR's merge ref and resets the base branch onto it
/// 4. Registers the checkout as a mirror of the repository URL
///
/// Nothing is cleaned up if a step fails.
///
/// # Errors
///
/// Returns [`CheckoutError`] if the PR info cannot be loaded or a command fails.
pub async fn check_out_sibling(
    source: &dyn PrInfoSource,
    launcher: &dyn ProcessLauncher,
    toolchain: &Toolchain,
    workspace_dir: &Path,
    pr: &CrossRepoPr,
) -> Result<SiblingCheckout, CheckoutError> {
    let span = info_span!("check_out_sibling", pr = %pr);

    async {
        let base_branch = source
            .pr_info(&pr.full_name(), &pr.pr_number)
            .await?
            .base
            .name;

        let checkout = SiblingCheckout::new(pr.clone(), base_branch, workspace_dir);
        info!(
            base = %checkout.base_branch,
            directory = %checkout.directory.display(),
            "Checking out linked PR"
        );

        run_all(launcher, &checkout.commands(toolchain)?).await?;

        info!("Registered mirror");
        Ok(checkout)
    }
    .instrument(span)
    .await
}
