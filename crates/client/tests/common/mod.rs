//! Common test utilities for integration tests.
//!
//! Every mocked SOAP method is matched on `POST` plus the method element in the
//! request body, since all calls of an endpoint share one path.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - The mock server serves both `/sdk` and `/pbm/sdk`; clients are built with
//!   the mock server's port as the Storage Policy port

#[allow(unused_imports)]
pub use vsphere_client::testing::{SESSION_COOKIE_VALUE, SESSION_SET_COOKIE, load_fixture};

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use vsphere_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;
use vsphere_client::VimClient;
use wiremock::matchers::{body_string_contains, method, path};

/// 200 response carrying an XML fixture.
#[allow(dead_code)]
pub fn soap_ok(fixture: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("Content-Type", "text/xml; charset=utf-8")
        .set_body_string(load_fixture(fixture))
}

/// Mock matching one SOAP method on `endpoint`.
#[allow(dead_code)]
pub fn soap_method(endpoint: &str, method_name: &str) -> wiremock::MockBuilder {
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
    soap_method("/sdk", "Logout")
        .respond_with(soap_ok("vim/logout.xml"))
        .mount(server)
        .await;
}

/// Mount `PbmRetrieveServiceContent` on `/pbm/sdk`.
#[allow(dead_code)]
pub async fn mount_pbm_service_content(server: &MockServer) {
    soap_method("/pbm/sdk", "PbmRetrieveServiceContent")
        .respond_with(soap_ok("pbm/retrieve_service_content.xml"))
        .mount(server)
        .await;
}

/// An unauthenticated client pointed at the mock server.
#[allow(dead_code)]
pub fn vim_client(server: &MockServer) -> VimClient {
    VimClient::builder()
        .base_url(server.uri())
        .credentials(
            "administrator@vsphere.local",
            SecretString::new("VMware1!".to_string().into()),
        )
        .pbm_port(Some(server.address().port()))
        .build()
        .expect("client should build")
}

/// A client that has completed `login()` against the mock server.
#[allow(dead_code)]
pub async fn logged_in_client(server: &MockServer) -> VimClient {
    mount_vim_session(server).await;
    let mut client = vim_client(server);
    client.login().await.expect("login should succeed");
    client
}
