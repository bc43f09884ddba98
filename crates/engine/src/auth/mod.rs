//! Session context, route guard and the login form

mod context;
mod guard;
mod login;

pub use context::{AuthContext, AuthState, Navigator};
pub use guard::{
    guard, login_redirect, return_url_from_query, safe_return_url, GuardOutcome, HOME_PATH, LOGIN_PATH,
};
pub use login::{LoginFlow, LoginOutcome, EMPTY_NICKNAME_MESSAGE, MISSING_USER_ID_MESSAGE};
