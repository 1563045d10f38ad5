//! Route classification for the session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard component and the navbar both need one answer to "may this
//! visitor see this path, and if not, where do they go". Classification is a
//! static prefix lookup so it can run before any page code and stays
//! identical across every route.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Path prefixes that require an authenticated session.
pub const PROTECTED_PREFIXES: &[&str] = &["/profile", "/compose", "/communities"];

/// Path prefixes that only make sense without a session.
pub const PUBLIC_ONLY_PREFIXES: &[&str] = &["/login", "/register", "/reset-password"];

/// Where unauthenticated visitors are sent from protected paths.
pub const LOGIN_PATH: &str = "/login";

/// Default landing path for an authenticated session.
pub const AUTHED_LANDING_PATH: &str = "/explore";

/// How a path relates to the session requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Requires a session; anonymous visitors are sent to login.
    Protected,
    /// Login/registration surface; authenticated users are sent onward.
    PublicOnly,
    /// Rendered for everyone.
    Neutral,
}

/// Classify a path against the two prefix lists. Unlisted paths are neutral.
#[must_use]
pub fn classify(path: &str) -> RouteClass {
    if matches_any(path, PROTECTED_PREFIXES) {
        RouteClass::Protected
    } else if matches_any(path, PUBLIC_ONLY_PREFIXES) {
        RouteClass::PublicOnly
    } else {
        RouteClass::Neutral
    }
}

/// The redirect a visitor should get for `path`, if any.
///
/// `None` means render the route. The three outcomes mirror the guard
/// contract: protected paths bounce anonymous visitors to [`LOGIN_PATH`],
/// public-only paths bounce signed-in users to [`AUTHED_LANDING_PATH`],
/// neutral paths never redirect.
#[must_use]
pub fn redirect_for(path: &str, authenticated: bool) -> Option<&'static str> {
    match classify(path) {
        RouteClass::Protected if !authenticated => Some(LOGIN_PATH),
        RouteClass::PublicOnly if authenticated => Some(AUTHED_LANDING_PATH),
        _ => None,
    }
}

fn matches_any(path: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| matches_prefix(path, prefix))
}

/// Prefix match on whole path segments: `/profile` covers `/profile` and
/// `/profile/me` but not `/profiles`.
fn matches_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
