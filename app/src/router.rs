//! Path-based router
//!
//! Same routes as the web client. Unknown paths go home; anonymous visits
//! to anything but `/login` go to the login page with a `returnUrl`.

use std::sync::Mutex;
use tracing::debug;
use voltup_engine::auth::{guard, GuardOutcome, HOME_PATH};
use voltup_engine::Navigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    Roulette,
    Products,
    MyInfo,
    Orders,
}

/// Tabs shown in the bottom bar, in order
pub const TABS: [Route; 4] = [Route::Home, Route::Roulette, Route::Products, Route::MyInfo];

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Home => "/",
            Route::Roulette => "/roulette",
            Route::Products => "/products",
            Route::MyInfo => "/my",
            Route::Orders => "/orders",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Home => "Home",
            Route::Roulette => "Roulette",
            Route::Products => "Products",
            Route::MyInfo => "My",
            Route::Orders => "Orders",
        }
    }

    /// Match a location (query and fragment ignored, trailing slash allowed)
    pub fn parse(location: &str) -> Option<Route> {
        let path = split_location(location).0;
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        [
            Route::Login,
            Route::Home,
            Route::Roulette,
            Route::Products,
            Route::MyInfo,
            Route::Orders,
        ]
        .into_iter()
        .find(|route| route.path() == path)
    }
}

/// `("/login", "returnUrl=%2F")` for `/login?returnUrl=%2F`
pub fn split_location(location: &str) -> (&str, &str) {
    let location = location.split('#').next().unwrap_or(location);
    match location.split_once('?') {
        Some((path, query)) => (path, query),
        None => (location, ""),
    }
}

/// Current location plus a history stack
pub struct Router {
    history: Mutex<Vec<String>>,
}

impl Router {
    pub fn new(initial: &str) -> Self {
        Self {
            history: Mutex::new(vec![initial.to_string()]),
        }
    }

    pub fn current(&self) -> String {
        self.history
            .lock()
            .ok()
            .and_then(|h| h.last().cloned())
            .unwrap_or_else(|| HOME_PATH.to_string())
    }

    pub fn history(&self) -> Vec<String> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }

    /// Go to `location` and settle on the page that will actually be shown.
    /// Redirects replace the current entry.
    pub fn open(&self, location: &str, authenticated: bool) -> (Route, String) {
        self.navigate(location, false);

        let mut location = location.to_string();
        if Route::parse(&location).is_none() {
            debug!("Unknown path {}, redirecting home", location);
            location = HOME_PATH.to_string();
            self.navigate(&location, true);
        }

        if let GuardOutcome::Redirect(target) = guard(&location, authenticated) {
            debug!("Anonymous access to {}, redirecting to {}", location, target);
            location = target;
            self.navigate(&location, true);
        }

        let route = Route::parse(&location).unwrap_or(Route::Home);
        (route, location)
    }
}

impl Navigator for Router {
    fn navigate(&self, path: &str, replace: bool) {
        if let Ok(mut history) = self.history.lock() {
            if replace {
                history.pop();
            }
            history.push(path.to_string());
        }
    }
}
