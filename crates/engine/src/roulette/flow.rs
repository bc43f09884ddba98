//! Daily roulette flow
//!
//! Eligibility comes from the status endpoint, which is optional on the
//! backend: any failure reading it counts as "not yet participated" and the
//! spin control stays available. The participate call is the authority; a
//! `C007` rejection flips a local flag so the control disappears anyway.

use super::animator::WheelDriver;
use crate::query::{points_me_key, roulette_status_key, QueryClient};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, warn};
use voltup_core::{is_already_participated, roulette_error_message, RouletteResult};
use voltup_networking::RewardsApi;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinOutcome {
    /// Already spinning or already played today; nothing was sent
    Ignored,
    Granted(RouletteResult),
    /// Message to show inline under the wheel
    Failed(String),
}

/// Everything the roulette section renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouletteView {
    pub status_loading: bool,
    pub participated_today: bool,
    pub spinning: bool,
    pub result: Option<RouletteResult>,
    pub error: Option<String>,
}

impl RouletteView {
    pub fn can_spin(&self) -> bool {
        !self.spinning && !self.participated_today
    }
}

#[derive(Debug, Default)]
struct RouletteState {
    status_loading: bool,
    server_participated: bool,
    local_participated: bool,
    spinning: bool,
    result: Option<RouletteResult>,
    error: Option<String>,
}

pub struct RouletteFlow {
    api: Arc<dyn RewardsApi>,
    queries: Arc<QueryClient>,
    wheel: Arc<dyn WheelDriver>,
    state: Mutex<RouletteState>,
}

impl RouletteFlow {
    pub fn new(api: Arc<dyn RewardsApi>, queries: Arc<QueryClient>, wheel: Arc<dyn WheelDriver>) -> Self {
        Self {
            api,
            queries,
            wheel,
            state: Mutex::new(RouletteState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, RouletteState> {
        // a panic while holding the lock leaves plain data behind; keep using it
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Read today's status. Fails open: an unreachable or missing status
    /// endpoint means the user may spin.
    pub async fn load_status(&self) -> bool {
        self.state().status_loading = true;

        let participated = match self.queries.roulette_status(self.api.as_ref()).await {
            Ok(status) => status.participated_today,
            Err(e) => {
                warn!("Roulette status unavailable, assuming not participated: {}", e);
                false
            }
        };

        let mut state = self.state();
        state.status_loading = false;
        state.server_participated = participated;
        participated || state.local_participated
    }

    pub fn participated_today(&self) -> bool {
        let state = self.state();
        state.server_participated || state.local_participated
    }

    pub fn view(&self) -> RouletteView {
        let state = self.state();
        RouletteView {
            status_loading: state.status_loading && !state.local_participated,
            participated_today: state.server_participated || state.local_participated,
            spinning: state.spinning,
            result: state.result,
            error: state.error.clone(),
        }
    }

    /// Spin once. A second request while the first is pending, or after
    /// today's spin, is a no-op.
    pub async fn spin(&self) -> SpinOutcome {
        {
            let mut state = self.state();
            if state.spinning || state.server_participated || state.local_participated {
                return SpinOutcome::Ignored;
            }
            state.spinning = true;
            state.error = None;
        }

        self.wheel.spin();
        let response = self.api.participate().await;

        let mut state = self.state();
        state.spinning = false;

        match response {
            Ok(result) => {
                info!("Roulette result: {}", result.granted_point);
                self.wheel.land(result.granted_point);
                state.result = Some(result);
                state.local_participated = true;
                drop(state);

                self.queries.invalidate(&points_me_key());
                self.queries.invalidate(&roulette_status_key());
                SpinOutcome::Granted(result)
            }
            Err(e) => {
                warn!("Roulette participation failed: {}", e);
                self.wheel.halt();
                if is_already_participated(&e) {
                    state.local_participated = true;
                } else if e.is_api_error() {
                    // unrecognised rejection: let the next status read decide
                    self.queries.invalidate(&roulette_status_key());
                }
                let message = roulette_error_message(&e);
                state.error = Some(message.clone());
                SpinOutcome::Failed(message)
            }
        }
    }

    /// Dismiss the result modal
    pub fn close_result(&self) {
        self.state().result = None;
    }
}

/// Title and body of the result modal
pub fn result_modal_text(result: &RouletteResult) -> (&'static str, String) {
    if result.is_win() {
        (
            "Congratulations!",
            format!("{} added to your balance.", result.granted_point),
        )
    } else {
        (
            "No luck this time",
            "Nothing this round. Try again tomorrow!".to_string(),
        )
    }
}
