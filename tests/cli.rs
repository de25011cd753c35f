//
//  baruwa-cli
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use baruwa_cli::exit_codes;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `baruwa` invocation isolated from the caller's environment and config.
fn baruwa(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("baruwa").unwrap();
    cmd.env_remove("BARUWA_API_TOKEN")
        .env_remove("BARUWA_API_SERVER")
        .env_remove("BARUWA_CLIENT_ID")
        .env_remove("BARUWA_CLIENT_SECRET")
        .env_remove("BARUWA_DEBUG")
        .arg("--config")
        .arg(config_dir.path().join("config.toml"));
    cmd
}

#[test]
fn test_version_prints_crate_version() {
    let dir = TempDir::new().unwrap();
    baruwa(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("baruwa version "));
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    baruwa(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("systemstatus"))
        .stdout(predicate::str::contains("organizations"));
}

#[test]
fn test_missing_credentials_fail() {
    let dir = TempDir::new().unwrap();
    baruwa(&dir)
        .arg("users")
        .assert()
        .failure()
        .code(exit_codes::ERROR)
        .stderr(predicate::str::contains("Endpoint or token variables not set"));
}

#[test]
fn test_json_and_table_conflict() {
    let dir = TempDir::new().unwrap();
    baruwa(&dir)
        .args(["--json", "--table", "users"])
        .assert()
        .failure()
        .code(exit_codes::USAGE);
}

#[test]
fn test_credentials_from_config_file() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/v1/status")
        .match_header("authorization", "Bearer file-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"inbound": 3, "outbound": 1, "status": true, "total": {"total": 42}}"#)
        .create();

    std::fs::write(
        dir.path().join("config.toml"),
        format!("server_url = \"{}\"\napi_token = \"file-token\"\n", server.url()),
    )
    .unwrap();

    baruwa(&dir)
        .arg("systemstatus")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"inbound\": 3"));
    mock.assert();
}

#[test]
fn test_not_found_maps_to_exit_code() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/v1/users/7")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code": 404, "message": "The requested user was not found"}"#)
        .create();

    let url = server.url();
    baruwa(&dir)
        .args(["-s", url.as_str(), "-k", "token", "user", "show", "--uid", "7"])
        .assert()
        .failure()
        .code(exit_codes::NOT_FOUND)
        .stderr(predicate::str::contains("Error:"));
    mock.assert();
}

#[test]
fn test_unauthorized_maps_to_exit_code() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/v1/domains")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code": 401, "message": "Unauthorized"}"#)
        .create();

    let url = server.url();
    baruwa(&dir)
        .args(["-s", url.as_str(), "-k", "expired", "domains"])
        .assert()
        .failure()
        .code(exit_codes::AUTH_ERROR);
}
