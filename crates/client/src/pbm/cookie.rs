//! Session cookie and host string helpers.

use crate::error::{ClientError, Result};

/// The session cookie value: the text between the first pair of double
/// quotes in a `Set-Cookie` string such as `vmware_soap_session="abc"; Path=/`.
pub fn extract_session_cookie(cookie: &str) -> Result<&str> {
    let mut parts = cookie.split('"');
    parts.next();
    match (parts.next(), parts.next()) {
        (Some(value), Some(_)) => Ok(value),
        _ => Err(ClientError::InvalidCookie(
            "expected a double-quoted session value".to_string(),
        )),
    }
}

/// Drop a trailing `:port` from a `host:port` authority.
///
/// Bracketed IPv6 literals keep their brackets: `[::1]:443` becomes `[::1]`.
pub fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }
    match host.rsplit_once(':') {
        Some((name, port))
            if !name.contains(':') && !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) =>
        {
            name
        }
        _ => host,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_session_cookie() {
        assert_eq!(
            extract_session_cookie(r#"vmware_soap_session="abc123"; Path=/"#).unwrap(),
            "abc123"
        );
    }

    #[test]
    fn test_extract_session_cookie_takes_first_quoted_value() {
        let raw = r#"vmware_soap_session="52a1c9f7-ab"; Path=/; HttpOnly; Secure; other="x""#;
        assert_eq!(extract_session_cookie(raw).unwrap(), "52a1c9f7-ab");
    }

    #[test]
    fn test_extract_session_cookie_without_quotes_fails() {
        assert!(matches!(
            extract_session_cookie("vmware_soap_session=abc123; Path=/"),
            Err(ClientError::InvalidCookie(_))
        ));
        assert!(extract_session_cookie(r#"vmware_soap_session="abc123"#).is_err());
    }

    #[test]
    fn test_strip_port() {
        assert_eq!(strip_port("vcenter.example.com:443"), "vcenter.example.com");
        assert_eq!(strip_port("10.0.0.5"), "10.0.0.5");
        assert_eq!(strip_port("[fe80::1]:443"), "[fe80::1]");
        assert_eq!(strip_port("[fe80::1]"), "[fe80::1]");
    }
}
