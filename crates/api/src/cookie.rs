//! Session cookie transport.
//!
//! The cookie name is a single constant shared by the issuance and
//! verification paths; both go through this module and nothing else touches
//! the cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Duration;

/// Name of the session cookie on both the set and read paths.
pub const SESSION_COOKIE: &str = "auth-token";

/// Raw token from the request's cookies, if any.
pub fn read(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

/// Attach a freshly issued token to the response cookies.
///
/// HttpOnly and SameSite=Lax always; Secure per deployment config; Max-Age
/// matches the token TTL so cookie and token expire together.
pub fn issue_cookie(jar: CookieJar, token: String, ttl: Duration, secure: bool) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .path("/")
        .max_age(time::Duration::seconds(ttl.num_seconds()))
        .build();

    jar.add(cookie)
}

/// Expire the session cookie (logout).
pub fn clear_cookie(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build())
}
