//! The `session_id` cookie that scopes a visitor's conversation.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use northbound_types::chat::SessionId;

pub const SESSION_COOKIE: &str = "session_id";

/// Cookies live for 30 days and are refreshed on every message.
pub const SESSION_MAX_AGE_DAYS: i64 = 30;

/// Session id carried by the request, if any.
pub fn session_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// Build the cookie that (re)binds the client to `session_id`.
pub fn session_cookie(session_id: &SessionId, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id.as_str().to_string()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::days(SESSION_MAX_AGE_DAYS))
        .build()
}
