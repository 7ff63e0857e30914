//! Session cookie handling
//!
//! The session token travels in an httpOnly cookie named `token`.
//! Browsers cannot read it from script; the auth extractor pulls it
//! back out of the `Cookie` request header.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

/// Name of the session cookie
pub const TOKEN_COOKIE: &str = "token";

/// Build the `Set-Cookie` value that installs a session token
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        TOKEN_COOKIE, token, max_age_secs
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build the `Set-Cookie` value that clears the session cookie
pub fn clear_cookie(secure: bool) -> String {
    let mut cookie = format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", TOKEN_COOKIE);
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Extract the session token from the `Cookie` request header
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let raw = headers.get(COOKIE)?.to_str().ok()?;
    raw.split(';').map(str::trim).find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == TOKEN_COOKIE).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_token_single_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("token=abc.def.ghi"));
        assert_eq!(extract_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_token_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; token=abc.def.ghi; lang=en"),
        );
        assert_eq!(extract_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_token_missing() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(extract_token(&headers), None);

        let empty = HeaderMap::new();
        assert_eq!(extract_token(&empty), None);
    }

    #[test]
    fn test_session_cookie_format() {
        let cookie = session_cookie("abc", 3600, false);
        assert_eq!(cookie, "token=abc; Path=/; HttpOnly; SameSite=Lax; Max-Age=3600");

        let secure = session_cookie("abc", 3600, true);
        assert!(secure.ends_with("; Secure"));
    }

    #[test]
    fn test_clear_cookie_format() {
        let cookie = clear_cookie(false);
        assert_eq!(cookie, "token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    }
}
