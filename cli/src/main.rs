//! CLI for checking out linked cross-repo PRs in CI.
//!
//! Reads the description of a pull request, finds its `Linked PR:` lines, and
//! checks out each linked PR next to the current checkout as a local package
//! mirror.

use clap::Parser;
use cross_pr_checkout::{Runner, RunnerConfig, RunnerError, SiblingCheckout, DEFAULT_BUILD_TOOL};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use url::Url;

/// Cross-repo PR checkout - Test a PR together with the PRs it links to.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Repository of the PR under test, e.g. `swiftlang/swift-syntax`.
    repository: String,

    /// Number of the PR under test.
    pr_number: String,

    /// Base URL of the GitHub REST API.
    #[arg(long, env = "GITHUB_API_URL", default_value = cross_pr_checkout::DEFAULT_API_URL)]
    api_url: Url,

    /// Directory to clone linked repositories into [default: parent of the current directory].
    #[arg(long)]
    workspace_dir: Option<PathBuf>,

    /// Build tool used to register local mirrors.
    #[arg(long, default_value = DEFAULT_BUILD_TOOL)]
    build_tool: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments; usage errors are fatal like any other failure.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            // --help and --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    match run(args).await {
        Ok(checkouts) => {
            print_summary(&checkouts);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<Vec<SiblingCheckout>, RunnerError> {
    let mut config = RunnerConfig::new(args.repository, args.pr_number, args.api_url)
        .with_build_tool(args.build_tool);
    if let Some(dir) = args.workspace_dir {
        config = config.with_workspace_dir(dir);
    }
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Logs where each linked PR was checked out.
fn print_summary(checkouts: &[SiblingCheckout]) {
    for checkout in checkouts {
        info!(
            pr = %checkout.pr,
            base = %checkout.base_branch,
            directory = %checkout.directory.display(),
            "Linked PR checked out"
        );
    }
}
