//! Session and device cookies

use http::header::{self, HeaderMap, HeaderValue};
use shared::{AppError, AppResult};

/// Admin session cookie
pub const SESSION_COOKIE: &str = "token";

/// Paired device cookie
pub const DEVICE_COOKIE: &str = "device-token";

/// Device cookies outlive any realistic install (10 years)
pub const DEVICE_COOKIE_MAX_AGE_SECS: i64 = 10 * 365 * 24 * 60 * 60;

/// Read a cookie value from the request headers
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == name).then_some(value.trim())
        })
        .find(|value| !value.is_empty())
}

/// Build an HTTP-only `Set-Cookie` value
pub fn build_cookie(
    name: &str,
    value: &str,
    max_age_secs: i64,
    secure: bool,
) -> AppResult<HeaderValue> {
    let mut cookie =
        format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}");
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie).map_err(|e| AppError::internal(format!("Invalid cookie: {e}")))
}

/// `Set-Cookie` value that removes the cookie
pub fn expire_cookie(name: &str, secure: bool) -> AppResult<HeaderValue> {
    build_cookie(name, "", 0, secure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; token=abc123; device-token=def"),
        );
        assert_eq!(read_cookie(&headers, SESSION_COOKIE), Some("abc123"));
        assert_eq!(read_cookie(&headers, DEVICE_COOKIE), Some("def"));
        assert_eq!(read_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_read_cookie_across_headers_and_empty_values() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("token="));
        headers.append(header::COOKIE, HeaderValue::from_static("device-token=xyz"));
        assert_eq!(read_cookie(&headers, SESSION_COOKIE), None);
        assert_eq!(read_cookie(&headers, DEVICE_COOKIE), Some("xyz"));
    }

    #[test]
    fn test_build_cookie_attributes() {
        let value = build_cookie(SESSION_COOKIE, "abc", 86400, false).unwrap();
        assert_eq!(
            value.to_str().unwrap(),
            "token=abc; Path=/; HttpOnly; SameSite=Lax; Max-Age=86400"
        );

        let value = expire_cookie(DEVICE_COOKIE, true).unwrap();
        assert_eq!(
            value.to_str().unwrap(),
            "device-token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0; Secure"
        );
    }
}
