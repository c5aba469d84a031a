//! PR info lookups against a mock GitHub API.

use cross_pr_checkout::{GitHubPrInfo, PrInfoError, PrInfoSource};
use mockito::Server;
use serde_json::json;
use url::Url;

fn client(server: &Server) -> GitHubPrInfo {
    GitHubPrInfo::new(Url::parse(&server.url()).unwrap()).unwrap()
}

#[tokio::test]
async fn decodes_base_branch_and_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/swiftlang/swift-syntax/pulls/1234")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "number": 1234,
                "state": "open",
                "base": { "ref": "main", "sha": "0123abcd" },
                "body": "Linked PR: apple/swift-foo#42"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let info = client(&server)
        .pr_info("swiftlang/swift-syntax", "1234")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(info.base_branch(), "main");
    assert_eq!(info.body.as_deref(), Some("Linked PR: apple/swift-foo#42"));
}

#[tokio::test]
async fn decodes_null_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/repos/apple/swift-foo/pulls/42")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "base": { "ref": "release/6.0" }, "body": null }).to_string())
        .create_async()
        .await;

    let info = client(&server).pr_info("apple/swift-foo", "42").await.unwrap();

    assert_eq!(info.base_branch(), "release/6.0");
    assert_eq!(info.body, None);
}

#[tokio::test]
async fn not_found_names_the_url() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/repos/apple/swift-foo/pulls/9999")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest/pulls/pulls#get-a-pull-request"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let error = client(&server)
        .pr_info("apple/swift-foo", "9999")
        .await
        .unwrap_err();

    assert!(matches!(error, PrInfoError::Request { .. }));
    let expected_url = format!("{}/repos/apple/swift-foo/pulls/9999", server.url());
    assert_eq!(
        error.to_string(),
        format!("Failed to load PR info from {expected_url}: Not Found (HTTP 404)")
    );
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/apple/swift-foo/pulls/1")
        .with_status(502)
        .expect(1)
        .create_async()
        .await;

    let result = client(&server).pr_info("apple/swift-foo", "1").await;

    mock.assert_async().await;
    assert!(matches!(result, Err(PrInfoError::Request { .. })));
}

#[tokio::test]
async fn connection_failure_is_a_single_line() {
    // Bind and release a port so nothing is listening on it.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let api_url = Url::parse(&format!("http://127.0.0.1:{port}")).unwrap();

    let error = GitHubPrInfo::new(api_url)
        .unwrap()
        .pr_info("a/b", "1")
        .await
        .unwrap_err();

    let message = error.to_string();
    assert!(
        message.starts_with(&format!("Failed to load PR info from http://127.0.0.1:{port}/repos/a/b/pulls/1: ")),
        "unexpected message: {message}"
    );
    assert!(!message.contains('\n'), "message spans lines: {message}");
}

#[tokio::test]
async fn malformed_json_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/repos/apple/swift-foo/pulls/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"base": "not an object"}"#)
        .create_async()
        .await;

    let error = client(&server)
        .pr_info("apple/swift-foo", "1")
        .await
        .unwrap_err();

    assert!(matches!(error, PrInfoError::Request { .. }));
    assert!(!error.to_string().contains('\n'), "message spans lines: {error}");
}

#[tokio::test]
async fn empty_payload_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/repos/apple/swift-foo/pulls/2")
        .with_status(200)
        .create_async()
        .await;

    let result = client(&server).pr_info("apple/swift-foo", "2").await;

    assert!(matches!(result, Err(PrInfoError::Request { .. })));
}

#[tokio::test]
async fn invalid_repository_fails_before_any_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let result = client(&server).pr_info("swift-syntax", "1").await;

    mock.assert_async().await;
    assert!(matches!(result, Err(PrInfoError::InvalidUrl { .. })));
}
