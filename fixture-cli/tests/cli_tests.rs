//! End-to-end tests of the `fixtures` binary

use assert_cmd::Command;
use mocks::{create_test_users, create_users_json};
use std::io::Write;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixtures() -> Command {
    let mut cmd = Command::cargo_bin("fixtures").unwrap();
    cmd.env_remove("CONFIG_FILE")
        .env_remove("USERS_BASE_URL")
        .env_remove("LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

async fn users_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_users_json()))
        .mount(&server)
        .await;
    server
}

#[test]
fn test_calc_scenarios() {
    assert_eq!(stdout_of(fixtures().args(["calc", "add", "2", "3"])), "5\n");
    assert_eq!(stdout_of(fixtures().args(["calc", "mul", "3", "4"])), "12\n");
    assert_eq!(stdout_of(fixtures().args(["calc", "sub", "5", "6"])), "-1\n");
    assert_eq!(stdout_of(fixtures().args(["calc", "div", "8", "4"])), "2\n");
}

#[test]
fn test_calc_division_by_zero_is_not_an_error() {
    assert_eq!(stdout_of(fixtures().args(["calc", "div", "1", "0"])), "inf\n");
}

#[test]
fn test_calc_rejects_unknown_operation() {
    fixtures().args(["calc", "pow", "2", "3"]).assert().failure();
}

#[test]
fn test_stats_sample_sequence() {
    let output = stdout_of(fixtures().args(["stats", "2", "1", "3", "-2", "-1", "-1"]));
    assert_eq!(output, "sum: 2\npositive: [2, 1, 3]\nnegative: [-2, -1, -1]\n");
}

#[test]
fn test_text_predicates() {
    assert_eq!(stdout_of(fixtures().args(["palindrome", "racecar"])), "true\n");
    assert_eq!(stdout_of(fixtures().args(["palindrome", "hello"])), "false\n");
    assert_eq!(stdout_of(fixtures().args(["anagram", "arc", "car"])), "true\n");
    assert_eq!(stdout_of(fixtures().args(["anagram", "cat", "dog"])), "false\n");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_users_from_base_url_flag() {
    let server = users_server().await;

    let output = stdout_of(fixtures().args(["users", "--json", "--base-url", &server.uri()]));
    let parsed: Vec<fixture_core::User> = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, create_test_users());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_users_from_config_file() {
    let server = users_server().await;
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[endpoint]\nbase_url = \"{}\"", server.uri()).unwrap();

    let output = stdout_of(
        fixtures()
            .arg("users")
            .env("CONFIG_FILE", file.path()),
    );
    assert_eq!(
        output,
        "1\tJane Doe\tjane.doe@example.com\n2\tJohn Smith\tjohn.smith@example.com\n"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_users_from_prefixed_env_var() {
    let server = users_server().await;

    let output = stdout_of(
        fixtures()
            .args(["users", "--json"])
            .env("FIXTURES_ENDPOINT__BASE_URL", server.uri()),
    );
    let parsed: Vec<fixture_core::User> = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, create_test_users());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_users_server_error_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let assert = fixtures()
        .args(["users", "--base-url", &server.uri()])
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("Request failed with status code 500"), "stderr: {stderr}");
}

#[test]
fn test_invalid_base_url_is_rejected() {
    fixtures()
        .args(["users", "--base-url", "localhost:3000"])
        .assert()
        .failure();
}
