//! Token-cookie access for the session layer.
//!
//! The backend sets an access/refresh cookie pair on login and refresh; the
//! client reads them as a rehydration hint (no cookies means no session worth
//! probing) and expires them on logout. Values are never logged.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

/// Cookie holding the short-lived access token.
pub const ACCESS_COOKIE: &str = "knoword_access";

/// Cookie holding the long-lived refresh token.
pub const REFRESH_COOKIE: &str = "knoword_refresh";

/// Extract a cookie's value from a `document.cookie` style header.
#[cfg(any(test, feature = "hydrate"))]
fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_owned())
    })
}

/// Cookie string that expires `name` immediately (epoch date, path `/`).
#[cfg(any(test, feature = "hydrate"))]
fn expiry_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT")
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

/// Read a cookie by name. `None` outside the browser.
pub fn read_cookie(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let header = html_document()?.cookie().ok()?;
        cookie_value(&header, name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Expire a cookie by writing it back with an epoch date.
pub fn expire_cookie(name: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = html_document() else {
            return;
        };
        let _ = doc.set_cookie(&expiry_cookie(name));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
    }
}

/// Expire both token cookies. Called from the global logout path.
pub fn clear_session_cookies() {
    expire_cookie(ACCESS_COOKIE);
    expire_cookie(REFRESH_COOKIE);
}

/// Whether either token cookie is present. The cheap "is there a session
/// worth rehydrating" probe used before any network call.
#[must_use]
pub fn has_session_cookies() -> bool {
    read_cookie(ACCESS_COOKIE).is_some() || read_cookie(REFRESH_COOKIE).is_some()
}
