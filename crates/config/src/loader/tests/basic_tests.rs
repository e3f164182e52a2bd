//! Basic builder tests: URL derivation, defaults and required fields.

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use secrecy::ExposeSecret;
use std::time::Duration;

fn with_credentials(loader: ConfigLoader) -> ConfigLoader {
    loader
        .with_username("administrator@vsphere.local".to_string())
        .with_password("secret".to_string())
}

#[test]
fn test_host_builds_https_url_with_default_port() {
    let config = with_credentials(ConfigLoader::new().with_host("vc.example.com".to_string()))
        .build()
        .unwrap();

    // 443 is the https default so the URL parser drops it
    assert_eq!(config.connection.base_url, "https://vc.example.com");
}

#[test]
fn test_host_and_custom_port() {
    let config = with_credentials(
        ConfigLoader::new()
            .with_host("vc.example.com".to_string())
            .with_port(8443),
    )
    .build()
    .unwrap();

    assert_eq!(config.connection.base_url, "https://vc.example.com:8443");
}

#[test]
fn test_base_url_overrides_host() {
    let config = with_credentials(
        ConfigLoader::new()
            .with_host("ignored.example.com".to_string())
            .with_base_url("http://127.0.0.1:9000/".to_string()),
    )
    .build()
    .unwrap();

    assert_eq!(config.connection.base_url, "http://127.0.0.1:9000");
}

#[test]
fn test_defaults_applied() {
    let config = with_credentials(ConfigLoader::new().with_host("vc".to_string()))
        .build()
        .unwrap();

    assert!(!config.connection.skip_verify);
    assert_eq!(
        config.connection.timeout,
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    );
    assert_eq!(config.connection.pbm_port, None);
    assert_eq!(config.auth.username, "administrator@vsphere.local");
    assert_eq!(config.auth.password.expose_secret(), "secret");
}

#[test]
fn test_missing_host_rejected() {
    let result = with_credentials(ConfigLoader::new()).build();
    assert!(matches!(result, Err(ConfigError::MissingHost)));
}

#[test]
fn test_missing_password_rejected() {
    let result = ConfigLoader::new()
        .with_host("vc".to_string())
        .with_username("admin".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingAuth)));
}

#[test]
fn test_skip_verify_and_pbm_port() {
    let config = with_credentials(
        ConfigLoader::new()
            .with_host("vc".to_string())
            .with_skip_verify(true)
            .with_pbm_port(8443),
    )
    .build()
    .unwrap();

    assert!(config.connection.skip_verify);
    assert_eq!(config.connection.pbm_port, Some(8443));
}
