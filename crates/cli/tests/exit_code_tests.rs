//! Integration tests for structured exit codes.
//!
//! These tests verify that vsphere-cli returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::*;
use predicates::prelude::*;
use wiremock::MockServer;

/// Test that rejected credentials return exit code 2.
#[tokio::test]
async fn test_invalid_login_returns_exit_code_2() {
    let server = MockServer::start().await;

    soap_method("/sdk", "RetrieveServiceContent")
        .respond_with(soap_ok("vim/retrieve_service_content.xml"))
        .mount(&server)
        .await;
    soap_method("/sdk", "Login")
        .respond_with(soap_fault("vim/invalid_login_fault.xml"))
        .mount(&server)
        .await;

    vsphere_cmd_for(&server)
        .env("VSPHERE_PASSWORD", "wrong")
        .arg("list-storage-policies")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to log in"));
}

/// Test that connection refused returns exit code 3.
#[test]
fn test_connection_refused_returns_exit_code_3() {
    // Use a port that's unlikely to be open
    vsphere_cmd()
        .env("VSPHERE_BASE_URL", "http://127.0.0.1:1")
        .arg("list-datastores")
        .assert()
        .code(3);
}

/// Test that a missing host is a configuration error with exit code 1.
#[test]
fn test_missing_host_returns_exit_code_1() {
    vsphere_cmd()
        .arg("list-datastores")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("vCenter host is required"));
}

/// Test that missing credentials are a configuration error with exit code 1.
#[test]
fn test_missing_credentials_returns_exit_code_1() {
    vsphere_cmd()
        .env_remove("VSPHERE_USERNAME")
        .env_remove("VSPHERE_PASSWORD")
        .args(["--host", "vc.example.com", "list-datastores"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Username and password are required"));
}

/// Test that an unknown output format is a general error.
#[test]
fn test_invalid_output_format_returns_exit_code_1() {
    vsphere_cmd()
        .args(["--host", "vc.example.com", "--output", "yaml", "list-datastores"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format"));
}
