//! Cookie helpers for the admin token slot.
//!
//! The client runtime persists and re-attaches the token; the server only
//! reads the one named slot and emits Set-Cookie values on login/logout.

use axum::http::{header, HeaderMap};

/// Read the token from the named cookie slot, if attached.
pub fn token_from_cookies(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Build the Set-Cookie value that hands the token to the client.
pub fn session_cookie(name: &str, token: &str, max_age_secs: i64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        name, token, max_age_secs
    )
}

/// Build the Set-Cookie value that discards the token client-side.
pub fn clear_cookie(name: &str) -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_reads_named_slot_only() {
        let headers = headers_with_cookie("theme=dark; admin_token=abc.def.ghi; lang=en");
        assert_eq!(
            token_from_cookies(&headers, "admin_token").as_deref(),
            Some("abc.def.ghi")
        );
        assert_eq!(token_from_cookies(&headers, "other_token"), None);
    }

    #[test]
    fn test_absent_cookie_header() {
        assert_eq!(token_from_cookies(&HeaderMap::new(), "admin_token"), None);
    }

    #[test]
    fn test_session_cookie_shape() {
        let cookie = session_cookie("admin_token", "tok", 86400);
        assert!(cookie.starts_with("admin_token=tok;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=86400"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        assert!(clear_cookie("admin_token").contains("Max-Age=0"));
    }
}
