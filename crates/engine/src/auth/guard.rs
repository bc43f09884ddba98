//! Route guard
//!
//! Every route except the login page needs a session. An anonymous visit
//! is sent to the login page with the requested location in `returnUrl`.

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    /// Replace the current location with this one
    Redirect(String),
}

/// Decide whether `location` (path plus optional query) may be shown
pub fn guard(location: &str, authenticated: bool) -> GuardOutcome {
    if authenticated || is_public(location) {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect(login_redirect(location))
    }
}

fn is_public(location: &str) -> bool {
    let path = location.split(['?', '#']).next().unwrap_or(location);
    path == LOGIN_PATH
}

/// `/login?returnUrl=<location, percent-encoded>`
pub fn login_redirect(location: &str) -> String {
    format!("{}?returnUrl={}", LOGIN_PATH, urlencoding::encode(location))
}

/// Where to go after login, read from a query string like
/// `returnUrl=%2Fproducts`. Defaults to home; anything that is not a
/// local path is ignored.
pub fn return_url_from_query(query: &str) -> String {
    let query = query.trim_start_matches('?');
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == "returnUrl")
        .and_then(|(_, value)| urlencoding::decode(&value.replace('+', " ")).ok().map(|v| v.into_owned()))
        .map(|url| safe_return_url(&url))
        .unwrap_or_else(|| HOME_PATH.to_string())
}

/// `url` when it is a local path, home otherwise
pub fn safe_return_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with('/') && !url.starts_with("//") {
        url.to_string()
    } else {
        HOME_PATH.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_protected_access_redirects() {
        assert_eq!(
            guard("/products", false),
            GuardOutcome::Redirect("/login?returnUrl=%2Fproducts".to_string())
        );
        assert_eq!(
            guard("/orders?page=2", false),
            GuardOutcome::Redirect("/login?returnUrl=%2Forders%3Fpage%3D2".to_string())
        );
    }

    #[test]
    fn test_login_page_is_public() {
        assert_eq!(guard("/login", false), GuardOutcome::Allow);
        assert_eq!(guard("/login?returnUrl=%2Fmy", false), GuardOutcome::Allow);
        assert_eq!(guard("/my", true), GuardOutcome::Allow);
    }

    #[test]
    fn test_return_url_parsing() {
        assert_eq!(return_url_from_query("returnUrl=%2Fproducts"), "/products");
        assert_eq!(return_url_from_query("?a=1&returnUrl=%2Forders%3Fpage%3D2"), "/orders?page=2");
        assert_eq!(return_url_from_query(""), "/");
        assert_eq!(return_url_from_query("returnUrl=https%3A%2F%2Fevil.example"), "/");
        assert_eq!(return_url_from_query("returnUrl=%2F%2Fevil.example"), "/");
    }

    #[test]
    fn test_safe_return_url() {
        assert_eq!(safe_return_url(" /my "), "/my");
        assert_eq!(safe_return_url("products"), "/");
    }
}
