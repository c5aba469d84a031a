//! Detection of `Linked PR:` references in pull request descriptions.
//!
//! A PR description can ask CI to test it together with PRs in sibling
//! repositories by adding lines such as:
//!
//! ```text
//! Linked PR: swiftlang/swift-syntax#1234
//! Linked PR: https://github.com/apple/swift-foo/pull/42
//! ```
//!
//! Lines are scanned with a single forward pass over fixed tokens rather than
//! a regular expression; the token order below defines what is accepted.

mod cross_repo_pr;

pub use cross_repo_pr::CrossRepoPr;

/// Case-insensitive prefix that marks a reference line.
const LINKED_PR_PREFIX: &str = "linked pr:";

/// Owner tokens, in the order they are searched for.
const OWNER_TOKENS: [&str; 2] = ["swiftlang/", "apple/"];

/// Separators accepted between the repository name and the PR number.
const SEPARATORS: [&str; 2] = ["/pull/", "#"];

/// Scans a PR body for cross-repo references.
///
/// Returns one [`CrossRepoPr`] per qualifying line, in document order. A
/// missing body yields no references.
#[must_use]
pub fn scan_linked_prs(body: Option<&str>) -> Vec<CrossRepoPr> {
    body.map(|body| body.lines().filter_map(parse_linked_pr_line).collect())
        .unwrap_or_default()
}

/// Parses a single line, returning the reference it names if any.
///
/// The owner token is searched for anywhere in the line, so an owner that
/// appears in text before the actual reference will be picked up.
#[must_use]
pub fn parse_linked_pr_line(line: &str) -> Option<CrossRepoPr> {
    if !line.to_lowercase().starts_with(LINKED_PR_PREFIX) {
        return None;
    }

    let (owner_token, remainder) = OWNER_TOKENS.iter().find_map(|token| {
        line.find(token)
            .map(|start| (*token, &line[start + token.len()..]))
    })?;
    let repository_owner = owner_token.trim_end_matches('/');

    let (repository_name, remainder) =
        split_run(remainder, |c| c.is_alphanumeric() || c == '-' || c == '_');
    if repository_name.is_empty() {
        return None;
    }

    let remainder = SEPARATORS
        .iter()
        .find_map(|separator| remainder.strip_prefix(separator))?;

    let (pr_number, _) = split_run(remainder, |c| c.is_ascii_digit());
    if pr_number.is_empty() {
        return None;
    }

    Some(CrossRepoPr::new(repository_owner, repository_name, pr_number))
}

/// Splits `input` after the longest prefix whose characters satisfy `accept`.
fn split_run(input: &str, accept: impl Fn(char) -> bool) -> (&str, &str) {
    let end = input
        .char_indices()
        .find(|(_, c)| !accept(*c))
        .map_or(input.len(), |(index, _)| index);
    input.split_at(end)
}
