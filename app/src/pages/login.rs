//! Login page

use super::frame;
use crate::router::{split_location, Route};
use crate::state::AppState;
use voltup_engine::auth::{return_url_from_query, safe_return_url, LoginFlow, LoginOutcome, HOME_PATH};
use voltup_engine::Scope;

/// Shown when the login request is abandoned before it answers
pub const INTERRUPTED_MESSAGE: &str = "Login was interrupted.";

/// The empty form, optionally with an inline error
pub fn form(state: &AppState, error: Option<&str>) -> String {
    let mut body = vec![
        "Welcome to VoltUp".to_string(),
        "Enter a nickname to get started: voltup login <nickname>".to_string(),
    ];
    let current = state.router.current();
    let return_url = return_url_from_query(split_location(&current).1);
    if return_url != HOME_PATH {
        body.push(format!(
            "You'll be taken back to {} (voltup login <nickname> --return-url {})",
            return_url, return_url
        ));
    }
    if let Some(error) = error {
        body.push(format!("! {}", error));
    }
    frame(state, Route::Login, &body.join("\n"))
}

/// Submit the nickname. Without an explicit `return_url`, the one carried
/// by the current `/login?returnUrl=...` location is used.
pub async fn submit(
    state: &AppState,
    scope: &Scope,
    nickname: &str,
    return_url: Option<&str>,
) -> (LoginOutcome, String) {
    let return_url = match return_url {
        Some(url) => safe_return_url(url),
        None => {
            let current = state.router.current();
            return_url_from_query(split_location(&current).1)
        }
    };

    let mut flow = LoginFlow::new();
    let Some(outcome) = scope
        .run(flow.submit(state.api.as_ref(), &state.auth, nickname, &return_url))
        .await
    else {
        return (
            LoginOutcome::Rejected(INTERRUPTED_MESSAGE.to_string()),
            form(state, Some(INTERRUPTED_MESSAGE)),
        );
    };

    let page = match &outcome {
        LoginOutcome::LoggedIn { .. } => {
            let name = state.auth.nickname().unwrap_or_default();
            frame(state, Route::Login, &format!("Logged in as {}", name))
        }
        LoginOutcome::Rejected(message) => form(state, Some(message)),
    };
    (outcome, page)
}
