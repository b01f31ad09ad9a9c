//! One-time notices carried across a redirect in an encrypted cookie.

use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use time::Duration;

pub const NOTICE_COOKIE: &str = "msg";

/// Attach a notice to be shown on the next rendered view.
pub fn set_notice(jar: PrivateCookieJar, message: &str) -> PrivateCookieJar {
    jar.add(build_cookie(NOTICE_COOKIE, message.to_string()))
}

/// Read the pending notice, if any, and clear it so it renders only once.
pub fn take_notice(jar: PrivateCookieJar) -> (PrivateCookieJar, Option<String>) {
    let Some(message) = jar.get(NOTICE_COOKIE).map(|c| c.value().to_owned()) else {
        return (jar, None);
    };
    (jar.remove(clear_cookie(NOTICE_COOKIE)), Some(message))
}

fn build_cookie(name: &str, value: String) -> Cookie<'static> {
    Cookie::build(Cookie::new(name.to_string(), value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::minutes(5))
        .build()
}

fn clear_cookie(name: &str) -> Cookie<'static> {
    Cookie::build(Cookie::new(name.to_string(), ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
