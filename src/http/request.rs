//! Request inspection.
//!
//! # Responsibilities
//! - Read the request ID set by the request-id layer
//! - Extract the login flag from the `Cookie` header
//!
//! # Design Decisions
//! - Cookie parsing is lenient: malformed pairs are skipped
//! - The first cookie with the flag key wins

use axum::http::{header, HeaderMap};

use crate::auth::AuthFlag;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// The request ID, or `"unknown"` when the header is missing.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Look up a cookie value by name across all `Cookie` headers.
pub fn cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"'))
}

/// The login flag carried by the request, if any.
pub fn auth_flag_from_cookies(headers: &HeaderMap, key: &str) -> Option<AuthFlag> {
    cookie(headers, key).map(AuthFlag::parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookies: &[&str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for c in cookies {
            map.append(header::COOKIE, HeaderValue::from_str(c).unwrap());
        }
        map
    }

    #[test]
    fn test_cookie_lookup() {
        let map = headers(&["theme=dark; isLoggedIn=yes", "other=1"]);
        assert_eq!(cookie(&map, "isLoggedIn"), Some("yes"));
        assert_eq!(cookie(&map, "other"), Some("1"));
        assert_eq!(cookie(&map, "missing"), None);
    }

    #[test]
    fn test_auth_flag_from_cookies() {
        assert_eq!(
            auth_flag_from_cookies(&headers(&["isLoggedIn=yes"]), "isLoggedIn"),
            Some(AuthFlag::LOGGED_IN)
        );
        assert_eq!(
            auth_flag_from_cookies(&headers(&["isLoggedIn=no"]), "isLoggedIn"),
            Some(AuthFlag::LOGGED_OUT)
        );
        assert_eq!(auth_flag_from_cookies(&headers(&["malformed"]), "isLoggedIn"), None);
    }

    #[test]
    fn test_request_id_default() {
        assert_eq!(request_id(&HeaderMap::new()), "unknown");
    }
}
