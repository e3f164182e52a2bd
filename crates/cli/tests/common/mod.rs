//! Shared test utilities for vsphere-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount the SOAP conversations every command starts with.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Credentials are set to dummy values unless overridden.
//! - Fixtures are shared with the client crate through its `test-utils` feature.

use assert_cmd::Command;
use vsphere_client::testing::{SESSION_SET_COOKIE, load_fixture};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

/// Returns a hermetic `vsphere-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Credentials are set to dummy values to satisfy config validation.
/// - Other connection env vars are cleared to ensure no leakage from the host.
pub fn vsphere_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vsphere-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("VSPHERE_USERNAME", "administrator@vsphere.local")
        .env("VSPHERE_PASSWORD", "VMware1!");

    // Clear potential host leakage
    cmd.env_remove("VSPHERE_HOST")
        .env_remove("VSPHERE_PORT")
        .env_remove("VSPHERE_BASE_URL")
        .env_remove("VSPHERE_DISABLE_SSL_VERIFICATION")
        .env_remove("VSPHERE_TIMEOUT")
        .env_remove("VSPHERE_PBM_PORT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `vsphere-cli` command pointed at `server` for both the
/// vim and Storage Policy endpoints.
#[allow(dead_code)]
pub fn vsphere_cmd_for(server: &MockServer) -> Command {
    let mut cmd = vsphere_cmd();
    cmd.env("VSPHERE_BASE_URL", server.uri())
        .env("VSPHERE_PBM_PORT", server.address().port().to_string());
    cmd
}

/// 200 response carrying an XML fixture.
#[allow(dead_code)]
pub fn soap_ok(fixture: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("Content-Type", "text/xml; charset=utf-8")
        .set_body_string(load_fixture(fixture))
}

/// 500 response carrying a SOAP fault fixture.
#[allow(dead_code)]
pub fn soap_fault(fixture: &str) -> ResponseTemplate {
    ResponseTemplate::new(500)
        .insert_header("Content-Type", "text/xml; charset=utf-8")
        .set_body_string(load_fixture(fixture))
}

/// Mock matching one SOAP method on `endpoint`.
#[allow(dead_code)]
pub fn soap_method(endpoint: &str, method_name: &str) -> MockBuilder {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(body_string_contains(format!("<{method_name} ")))
}

/// Mount `RetrieveServiceContent`, `Login` and `Logout` on `/sdk`.
#[allow(dead_code)]
pub async fn mount_vim_session(server: &MockServer) {
    soap_method("/sdk", "RetrieveServiceContent")
        .respond_with(soap_ok("vim/retrieve_service_content.xml"))
        .mount(server)
        .await;
    soap_method("/sdk", "Login")
        .respond_with(soap_ok("vim/login.xml").insert_header("Set-Cookie", SESSION_SET_COOKIE))
        .mount(server)
        .await;
    mount_logout(server).await;
}

/// Mount `Logout` on `/sdk`.
#[allow(dead_code)]
pub async fn mount_logout(server: &MockServer) {
    soap_method("/sdk", "Logout")
        .respond_with(soap_ok("vim/logout.xml"))
        .mount(server)
        .await;
}

/// Mount the Storage Policy service content and the requirement profiles.
#[allow(dead_code)]
pub async fn mount_pbm_profiles(server: &MockServer) {
    soap_method("/pbm/sdk", "PbmRetrieveServiceContent")
        .respond_with(soap_ok("pbm/retrieve_service_content.xml"))
        .mount(server)
        .await;
    soap_method("/pbm/sdk", "PbmQueryProfile")
        .respond_with(soap_ok("pbm/query_profile.xml"))
        .mount(server)
        .await;
    soap_method("/pbm/sdk", "PbmRetrieveContent")
        .respond_with(soap_ok("pbm/retrieve_content.xml"))
        .mount(server)
        .await;
}
