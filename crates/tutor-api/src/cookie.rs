//! Session credential transport: the session cookie and the Bearer header.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::{Duration, OffsetDateTime};

use tutor_core::config::SessionCookieConfig;

/// Reads the session credential, preferring the cookie over the header.
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(cookie_name) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
}

/// Session cookie carrying a fresh access token.
pub fn session_cookie(
    config: &SessionCookieConfig,
    access_token: &str,
    max_age_seconds: i64,
) -> Cookie<'static> {
    let mut cookie = base_cookie(config, access_token.to_string());
    cookie.set_max_age(Duration::seconds(max_age_seconds.max(0)));
    cookie
}

/// Session cookie that makes the browser drop the credential.
pub fn expired_session_cookie(config: &SessionCookieConfig) -> Cookie<'static> {
    let mut cookie = base_cookie(config, String::new());
    cookie.set_max_age(Duration::ZERO);
    cookie.set_expires(OffsetDateTime::UNIX_EPOCH);
    cookie
}

fn base_cookie(config: &SessionCookieConfig, value: String) -> Cookie<'static> {
    Cookie::build((config.name.clone(), value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .build()
}
