//! Running external tools.
//!
//! Commands are launched one at a time and awaited to completion. Their
//! output is not captured; it goes straight to the CI log.

mod error;

pub use error::ProcessError;

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

/// A command line to run: program, literal arguments, working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Absolute path of the program.
    pub program: PathBuf,

    /// Arguments passed verbatim to the program.
    pub args: Vec<String>,

    /// Directory to run in; `None` inherits the current directory.
    pub working_dir: Option<PathBuf>,
}

impl Invocation {
    /// Creates an invocation that inherits the current directory.
    pub fn new<I, S>(program: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: None,
        }
    }

    /// Sets the directory the program runs in.
    #[must_use]
    pub fn in_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(working_dir.into());
        self
    }

    /// Renders the command line for log output.
    ///
    /// Elements that contain a space are wrapped in single quotes.
    #[must_use]
    pub fn escaped(&self) -> String {
        let program = self.program.display().to_string();
        std::iter::once(program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(|part| {
                if part.contains(' ') {
                    format!("'{part}'")
                } else {
                    part.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let working_dir = self
            .working_dir
            .as_deref()
            .map_or_else(|| "<nil>".to_string(), |dir| dir.display().to_string());
        write!(
            f,
            "{} (working directory: {working_dir})",
            self.escaped()
        )
    }
}

/// Launches subprocesses and waits for them to finish.
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    /// Runs `invocation` to completion, failing unless it exits with status 0.
    async fn run(&self, invocation: &Invocation) -> Result<(), ProcessError>;
}

/// [`ProcessLauncher`] that spawns real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

#[async_trait]
impl ProcessLauncher for SystemLauncher {
    async fn run(&self, invocation: &Invocation) -> Result<(), ProcessError> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(dir) = &invocation.working_dir {
            command.current_dir(dir);
        }

        let status = command.status().await.map_err(|source| ProcessError::Spawn {
            command: invocation.escaped(),
            source,
        })?;
        debug!(command = %invocation.escaped(), %status, "Process exited");

        if status.success() {
            return Ok(());
        }
        match status.code() {
            Some(code) => Err(ProcessError::NonZeroExit {
                command: invocation.escaped(),
                code,
            }),
            None => Err(ProcessError::Terminated {
                command: invocation.escaped(),
            }),
        }
    }
}

/// Runs `invocations` in order, logging each before it starts.
///
/// Stops at the first failure; commands that already ran are not undone.
///
/// # Errors
///
/// Returns the [`ProcessError`] of the first command that fails.
pub async fn run_all(
    launcher: &dyn ProcessLauncher,
    invocations: &[Invocation],
) -> Result<(), ProcessError> {
    for invocation in invocations {
        println!("Running {invocation}");
        launcher.run(invocation).await?;
    }
    Ok(())
}
