//! Testing utilities for vSphere client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use vsphere_client::testing::load_fixture;
//!
//! let body = load_fixture("vim/login.xml");
//! ```

use std::path::Path;

/// `Set-Cookie` value returned by mocked `Login` responses.
pub const SESSION_SET_COOKIE: &str =
    r#"vmware_soap_session="52b7a5b6-1d1f-4f3e-9d4d-0e8d6c4f1a22"; Path=/; HttpOnly; Secure;"#;

/// The cookie value inside [`SESSION_SET_COOKIE`].
pub const SESSION_COOKIE_VALUE: &str = "52b7a5b6-1d1f-4f3e-9d4d-0e8d6c4f1a22";

/// Load an XML fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "vim/login.xml")
///
/// # Panics
/// - If the fixture file cannot be read
pub fn load_fixture(fixture_path: &str) -> String {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}
