//! Tests for dotenv loading behavior.
//!
//! Responsibilities:
//! - Test that missing `.env` files are silently ignored.
//! - Test that invalid `.env` files return errors without leaking secrets.
//! - Test that `DOTENV_DISABLED=1`/`true` skips dotenv loading.
//!
//! Invariants / Assumptions:
//! - Tests run under `#[serial]` and `env_lock()` because they change the cwd.
//! - Valid `.env` files only set `_VSPHERE_DOTENV_*` names so no `VSPHERE_*`
//!   value leaks into other tests.

use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

const INVALID_LINE: &str = "INVALID_LINE_WITHOUT_EQUALS";

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

/// Run `load_dotenv()` in a fresh directory holding `contents` as `.env`
/// (or no `.env` at all), with `DOTENV_DISABLED` set to `disabled`.
fn load_in_dir(contents: Option<&str>, disabled: Option<&str>) -> Result<(), ConfigError> {
    let temp_dir = TempDir::new().unwrap();
    if let Some(contents) = contents {
        fs::write(temp_dir.path().join(".env"), contents).unwrap();
    }
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_var("DOTENV_DISABLED", disabled, || {
        ConfigLoader::new().load_dotenv().map(|_| ())
    })
}

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    let _lock = env_lock().lock().unwrap();

    assert!(
        load_in_dir(None, None).is_ok(),
        "Missing .env file should be silently ignored"
    );
}

#[test]
#[serial]
fn test_valid_dotenv_is_ok() {
    let _lock = env_lock().lock().unwrap();

    let result = load_in_dir(Some("_VSPHERE_DOTENV_VALID=1\n"), None);

    assert!(result.is_ok(), "Valid .env file should load successfully");
    unsafe {
        std::env::remove_var("_VSPHERE_DOTENV_VALID");
    }
}

#[test]
#[serial]
fn test_invalid_dotenv_returns_parse_error() {
    let _lock = env_lock().lock().unwrap();

    match load_in_dir(Some(INVALID_LINE), None) {
        Err(ConfigError::DotenvParse { .. }) => {}
        Err(other) => panic!("Invalid .env should return DotenvParse error, got {}", other),
        Ok(()) => panic!("Invalid .env should return DotenvParse error, got Ok"),
    }
}

#[test]
#[serial]
fn test_dotenv_parse_error_does_not_leak_secrets() {
    let _lock = env_lock().lock().unwrap();
    let secret_value = "supersecret_password_12345";

    let result = load_in_dir(
        Some(&format!("_VSPHERE_DOTENV_SECRET={secret_value}\n{INVALID_LINE}")),
        None,
    );
    unsafe {
        std::env::remove_var("_VSPHERE_DOTENV_SECRET");
    }

    let error_string = result.expect_err("invalid .env must fail").to_string();
    assert!(
        !error_string.contains(secret_value),
        "Error message should NOT contain the secret value: {}",
        error_string
    );
    assert!(error_string.contains(".env"));
    assert!(error_string.contains("DOTENV_DISABLED"));
}

#[test]
#[serial]
fn test_dotenv_disabled_with_value_1() {
    let _lock = env_lock().lock().unwrap();

    assert!(
        load_in_dir(Some(INVALID_LINE), Some("1")).is_ok(),
        "DOTENV_DISABLED=1 should skip .env loading even if file is invalid"
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_with_value_true() {
    let _lock = env_lock().lock().unwrap();

    assert!(
        load_in_dir(Some(INVALID_LINE), Some("true")).is_ok(),
        "DOTENV_DISABLED=true should skip .env loading even if file is invalid"
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_other_values_not_disabled() {
    let _lock = env_lock().lock().unwrap();

    match load_in_dir(Some(INVALID_LINE), Some("false")) {
        Err(ConfigError::DotenvParse { .. }) => {}
        Err(other) => panic!(
            "DOTENV_DISABLED=false should NOT disable dotenv loading, got {}",
            other
        ),
        Ok(()) => panic!("DOTENV_DISABLED=false should NOT disable dotenv loading, got Ok"),
    }
}

#[cfg(unix)]
#[test]
#[serial]
fn test_dotenv_io_error_on_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let env_path = temp_dir.path().join(".env");
    fs::write(&env_path, "_VSPHERE_DOTENV_UNREADABLE=1\n").unwrap();
    fs::set_permissions(&env_path, fs::Permissions::from_mode(0o000)).unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    let result = temp_env::with_var("DOTENV_DISABLED", None::<&str>, || {
        ConfigLoader::new().load_dotenv().map(|_| ())
    });

    fs::set_permissions(&env_path, fs::Permissions::from_mode(0o644)).unwrap();

    match result {
        Err(ConfigError::DotenvIo { kind }) => {
            assert!(
                matches!(
                    kind,
                    std::io::ErrorKind::PermissionDenied | std::io::ErrorKind::Other
                ),
                "Expected PermissionDenied or Other, got {:?}",
                kind
            );
        }
        // Running as root can still read the file
        Ok(()) => unsafe {
            std::env::remove_var("_VSPHERE_DOTENV_UNREADABLE");
        },
        Err(other) => panic!("Expected DotenvIo error, got {}", other),
    }
}
