//! Login form flow

use super::AuthContext;
use tracing::{info, warn};
use voltup_core::login_error_message;
use voltup_networking::RewardsApi;

pub const EMPTY_NICKNAME_MESSAGE: &str = "Please enter a nickname.";
pub const MISSING_USER_ID_MESSAGE: &str = "Login information was not received.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Logged in and moved to `destination`
    LoggedIn { user_id: String, destination: String },
    /// Stayed on the form; the message is shown inline
    Rejected(String),
}

/// State of the nickname form
#[derive(Debug, Default)]
pub struct LoginFlow {
    loading: bool,
    error: Option<String>,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the form. The backend creates unknown nicknames, so the
    /// only local check is that the nickname is not blank.
    pub async fn submit(
        &mut self,
        api: &dyn RewardsApi,
        auth: &AuthContext,
        nickname: &str,
        return_url: &str,
    ) -> LoginOutcome {
        self.error = None;

        let nickname = nickname.trim();
        if nickname.is_empty() {
            return self.reject(EMPTY_NICKNAME_MESSAGE.to_string());
        }

        self.loading = true;
        let response = api.login(nickname).await;
        self.loading = false;

        match response {
            Ok(login) if !login.user_id.trim().is_empty() => {
                auth.login(&login.user_id, Some(nickname)).await;
                auth.navigator().navigate(return_url, true);
                info!("Login complete, continuing to {}", return_url);
                LoginOutcome::LoggedIn {
                    user_id: login.user_id,
                    destination: return_url.to_string(),
                }
            }
            Ok(_) => {
                warn!("Login response carried no user id");
                self.reject(MISSING_USER_ID_MESSAGE.to_string())
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                self.reject(login_error_message(&e))
            }
        }
    }

    fn reject(&mut self, message: String) -> LoginOutcome {
        self.error = Some(message.clone());
        LoginOutcome::Rejected(message)
    }
}
