//! Integration tests for the weather-mcp-server binary

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BIN: &str = env!("CARGO_BIN_EXE_weather-mcp-server");

/// Config path that does not exist, so only defaults and env vars apply
fn isolated_config(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("config.toml")
}

fn run_weather(base_url: &str, location: &str, dir: &tempfile::TempDir) -> Output {
    Command::new(BIN)
        .env_remove("RUST_LOG")
        .env("WEATHER_MCP_WEATHER__BASE_URL", base_url)
        .arg("--config")
        .arg(isolated_config(dir))
        .args(["weather", "--location", location])
        .output()
        .expect("Failed to execute binary")
}

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = Command::new(BIN)
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("wttr.in"));
    assert!(stdout.contains("serve"));
    assert!(stdout.contains("weather"));
}

/// Test that --port is only accepted together with --http
#[test]
fn test_port_requires_http_flag() {
    let output = Command::new(BIN)
        .args(["serve", "--port", "9000"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
}

/// Test weather subcommand prints the upstream JSON on stdout
#[tokio::test(flavor = "multi_thread")]
async fn test_weather_command_prints_payload() {
    let upstream = MockServer::start().await;
    let payload = json!({ "current_condition": [{ "temp_C": "21" }] });
    Mock::given(method("GET"))
        .and(path("/Tokyo"))
        .and(query_param("format", "j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .expect(1)
        .mount(&upstream)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = run_weather(&upstream.uri(), "Tokyo", &dir);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let printed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed, payload);
}

/// Test upstream failures make the command fail with the status on stderr
#[tokio::test(flavor = "multi_thread")]
async fn test_weather_command_fails_on_upstream_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&upstream)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = run_weather(&upstream.uri(), "London", &dir);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("503"), "stderr: {stderr}");
    assert!(
        stderr.contains("The weather service rejected the request (HTTP 503)."),
        "stderr: {stderr}"
    );
}

/// Test invalid configuration from the environment is rejected at startup
#[test]
fn test_invalid_env_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(BIN)
        .env("WEATHER_MCP_WEATHER__TIMEOUT_SECONDS", "1000")
        .arg("--config")
        .arg(isolated_config(&dir))
        .args(["weather", "--location", "London"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot exceed 300"), "stderr: {stderr}");
}

/// Test custom config file option
#[tokio::test(flavor = "multi_thread")]
async fn test_custom_config_file_sets_base_url() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Oslo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&upstream)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config_path = isolated_config(&dir);
    std::fs::write(
        &config_path,
        format!("[weather]\nbase_url = \"{}\"\n", upstream.uri()),
    )
    .unwrap();

    let output = Command::new(BIN)
        .env_remove("WEATHER_MCP_WEATHER__BASE_URL")
        .arg("--config")
        .arg(&config_path)
        .args(["weather", "--location", "Oslo"])
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    assert_eq!(
        serde_json::from_slice::<Value>(&output.stdout).unwrap(),
        json!({ "ok": true })
    );
}
