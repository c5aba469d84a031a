#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod checkout;
pub mod executables;
pub mod linked_prs;
pub mod pr_info;
pub mod process;
pub mod runner;

pub use checkout::{check_out_sibling, CheckoutError, SiblingCheckout, Toolchain, MERGE_REF_ALIAS};
pub use executables::{ExecutableLocator, LocateError, SearchPathLocator, SEARCH_PATH_VARIABLES};
pub use linked_prs::{parse_linked_pr_line, scan_linked_prs, CrossRepoPr};
pub use pr_info::{
    pull_request_url, BaseRef, GitHubPrInfo, PrInfo, PrInfoError, PrInfoSource, DEFAULT_API_URL,
};
pub use process::{run_all, Invocation, ProcessError, ProcessLauncher, SystemLauncher};
pub use runner::{Runner, RunnerConfig, RunnerError, DEFAULT_BUILD_TOOL};
