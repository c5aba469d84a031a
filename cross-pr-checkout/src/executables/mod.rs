//! Locating tool executables on the search path.

mod error;

pub use error::LocateError;

use std::env::consts::EXE_SUFFIX;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variables holding the search path, in lookup order.
///
/// Windows spells the variable `Path`; it is case-insensitive there, so both
/// names resolve to the same value.
pub const SEARCH_PATH_VARIABLES: [&str; 2] = ["PATH", "Path"];

/// Resolves logical executable names to paths.
pub trait ExecutableLocator: Send + Sync {
    /// Returns the path of the executable called `name`.
    fn locate(&self, name: &str) -> Result<PathBuf, LocateError>;
}

/// [`ExecutableLocator`] that searches `PATH`-style directory lists.
#[derive(Debug, Clone)]
pub struct SearchPathLocator {
    /// Values of the search path variables that were set, in lookup order.
    search_paths: Vec<OsString>,
    /// Directory that relative search path entries are resolved against.
    cwd: PathBuf,
}

impl SearchPathLocator {
    /// Creates a locator over explicit search path values.
    ///
    /// Each value is a platform separated list of directories, as found in
    /// `PATH`.
    pub fn new(search_paths: Vec<OsString>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            search_paths,
            cwd: cwd.into(),
        }
    }

    /// Creates a locator from the current process environment.
    pub fn from_env() -> Self {
        let search_paths = SEARCH_PATH_VARIABLES
            .iter()
            .filter_map(std::env::var_os)
            .collect();
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(search_paths, cwd)
    }
}

impl ExecutableLocator for SearchPathLocator {
    fn locate(&self, name: &str) -> Result<PathBuf, LocateError> {
        let executable = format!("{name}{EXE_SUFFIX}");

        if self.search_paths.is_empty() {
            return Err(LocateError::NoSearchPath { executable });
        }

        for search_path in &self.search_paths {
            if let Some(path) = find_in(&executable, search_path, &self.cwd) {
                debug!(executable = %executable, path = %path.display(), "Located executable");
                return Ok(path);
            }
        }

        Err(LocateError::NotFound { executable })
    }
}

/// Returns the first executable named `executable` in the directories of
/// `search_path`, in listed order.
fn find_in(executable: &str, search_path: &OsString, cwd: &Path) -> Option<PathBuf> {
    if search_path.is_empty() {
        return None;
    }
    which::which_in(executable, Some(search_path), cwd).ok()
}
