//! In-memory collaborators for driving a [`Runner`] without network or processes.
//!
//! [`Runner`]: cross_pr_checkout::Runner

#![allow(dead_code)]

use async_trait::async_trait;
use cross_pr_checkout::{
    ExecutableLocator, Invocation, LocateError, PrInfo, PrInfoError, PrInfoSource, ProcessError,
    ProcessLauncher,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// PR info source serving canned responses keyed by `(repository, number)`.
#[derive(Default)]
pub struct MockPrInfoSource {
    responses: HashMap<(String, String), PrInfo>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockPrInfoSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the response for `repository` PR `number`.
    pub fn with_pr(mut self, repository: &str, number: &str, info: PrInfo) -> Self {
        self.responses
            .insert((repository.to_string(), number.to_string()), info);
        self
    }

    /// Handle to the recorded `(repository, number)` lookups.
    pub fn calls(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl PrInfoSource for MockPrInfoSource {
    async fn pr_info(&self, repository: &str, pr_number: &str) -> Result<PrInfo, PrInfoError> {
        self.calls
            .lock()
            .unwrap()
            .push((repository.to_string(), pr_number.to_string()));
        self.responses
            .get(&(repository.to_string(), pr_number.to_string()))
            .cloned()
            .ok_or_else(|| PrInfoError::InvalidUrl {
                message: format!("no mock response for {repository}#{pr_number}"),
            })
    }
}

/// Locator that maps names to `/mock/bin/<name>`, or fails for everything.
pub struct FakeLocator {
    available: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeLocator {
    pub fn available() -> Self {
        Self {
            available: true,
            calls: Arc::default(),
        }
    }

    pub fn missing() -> Self {
        Self {
            available: false,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

impl ExecutableLocator for FakeLocator {
    fn locate(&self, name: &str) -> Result<PathBuf, LocateError> {
        self.calls.lock().unwrap().push(name.to_string());
        if self.available {
            Ok(PathBuf::from("/mock/bin").join(name))
        } else {
            Err(LocateError::NotFound {
                executable: name.to_string(),
            })
        }
    }
}

/// Launcher that records invocations and fails those whose arguments start
/// with a configured prefix.
#[derive(Default)]
pub struct RecordingLauncher {
    fail_on: Option<(Vec<String>, i32)>,
    invocations: Arc<Mutex<Vec<Invocation>>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes invocations whose arguments start with `args` exit with `code`.
    pub fn failing_on(mut self, args: &[&str], code: i32) -> Self {
        self.fail_on = Some((args.iter().map(ToString::to_string).collect(), code));
        self
    }

    pub fn invocations(&self) -> Arc<Mutex<Vec<Invocation>>> {
        Arc::clone(&self.invocations)
    }
}

#[async_trait]
impl ProcessLauncher for RecordingLauncher {
    async fn run(&self, invocation: &Invocation) -> Result<(), ProcessError> {
        self.invocations.lock().unwrap().push(invocation.clone());
        match &self.fail_on {
            Some((prefix, code)) if invocation.args.starts_with(prefix) => {
                Err(ProcessError::NonZeroExit {
                    command: invocation.escaped(),
                    code: *code,
                })
            }
            _ => Ok(()),
        }
    }
}

/// PR info with `body` targeting `main`.
pub fn pr_with_body(body: &str) -> PrInfo {
    PrInfo::new("main", Some(body.to_string()))
}
