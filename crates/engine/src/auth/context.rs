//! Auth context
//!
//! Explicit session state passed down to whatever needs it. Login and
//! logout keep three things in step: persisted storage, the in-memory
//! state and the current location.

use crate::query::QueryClient;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};
use voltup_core::Session;
use voltup_persistence::SessionStorage;

use super::guard::{HOME_PATH, LOGIN_PATH};

/// Moves the app to another location
pub trait Navigator: Send + Sync {
    /// `replace` swaps the current history entry instead of pushing one
    fn navigate(&self, path: &str, replace: bool);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

impl AuthState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Anonymous => None,
            AuthState::Authenticated(session) => Some(session),
        }
    }
}

pub struct AuthContext {
    storage: SessionStorage,
    state: RwLock<AuthState>,
    navigator: Arc<dyn Navigator>,
    queries: Arc<QueryClient>,
}

impl AuthContext {
    /// Build the initial state from whatever storage remembers
    pub async fn restore(
        storage: SessionStorage,
        navigator: Arc<dyn Navigator>,
        queries: Arc<QueryClient>,
    ) -> Self {
        let state = match storage.load_session().await {
            Some(session) => {
                info!("Restored session for {}", session.display_name());
                AuthState::Authenticated(session)
            }
            None => AuthState::Anonymous,
        };

        Self {
            storage,
            state: RwLock::new(state),
            navigator,
            queries,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.read().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn session(&self) -> Option<Session> {
        self.state().session().cloned()
    }

    pub fn user_id(&self) -> Option<String> {
        self.session().map(|s| s.user_id)
    }

    pub fn nickname(&self) -> Option<String> {
        self.session().and_then(|s| s.nickname)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    fn set_state(&self, state: AuthState) {
        match self.state.write() {
            Ok(mut guard) => *guard = state,
            Err(e) => warn!("Auth state lock poisoned: {}", e),
        }
    }

    /// Persist the identity, update state and go home.
    ///
    /// A blank nickname keeps whatever nickname was stored before.
    pub async fn login(&self, user_id: &str, nickname: Option<&str>) {
        let nickname = nickname.map(str::trim).filter(|n| !n.is_empty());

        self.storage.set_user_id(user_id).await;
        let nickname = match nickname {
            Some(n) => {
                self.storage.set_nickname(n).await;
                Some(n.to_string())
            }
            None => self.storage.nickname().await,
        };

        info!("Logged in as {}", user_id);
        self.set_state(AuthState::Authenticated(Session::new(user_id, nickname)));
        self.navigator.navigate(HOME_PATH, true);
    }

    /// Forget the identity everywhere and go to the login page
    pub async fn logout(&self) {
        self.storage.clear_user_id().await;
        self.storage.clear_nickname().await;
        self.set_state(AuthState::Anonymous);
        // cached balances belong to the previous user
        self.queries.clear();

        info!("Logged out");
        self.navigator.navigate(LOGIN_PATH, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingNavigator;
    use voltup_core::Points;

    async fn context(storage: SessionStorage) -> (AuthContext, Arc<RecordingNavigator>, Arc<QueryClient>) {
        let navigator = Arc::new(RecordingNavigator::default());
        let queries = Arc::new(QueryClient::new());
        let auth = AuthContext::restore(storage, navigator.clone(), queries.clone()).await;
        (auth, navigator, queries)
    }

    #[tokio::test]
    async fn test_restore_from_storage() {
        let storage = SessionStorage::in_memory();
        let (auth, _, _) = context(storage.clone()).await;
        assert_eq!(auth.state(), AuthState::Anonymous);

        storage.set_user_id("u1").await;
        storage.set_nickname("Alice").await;
        let (auth, _, _) = context(storage).await;
        assert_eq!(auth.user_id().as_deref(), Some("u1"));
        assert_eq!(auth.nickname().as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_login_persists_and_navigates_home() {
        let storage = SessionStorage::in_memory();
        let (auth, navigator, _) = context(storage.clone()).await;

        auth.login("u1", Some("  Alice ")).await;

        assert!(auth.is_authenticated());
        assert_eq!(auth.nickname().as_deref(), Some("Alice"));
        assert_eq!(storage.user_id().await.as_deref(), Some("u1"));
        assert_eq!(storage.nickname().await.as_deref(), Some("Alice"));
        assert_eq!(navigator.last(), Some(("/".to_string(), true)));
    }

    #[tokio::test]
    async fn test_blank_nickname_keeps_stored_one() {
        let storage = SessionStorage::in_memory();
        storage.set_nickname("Alice").await;
        let (auth, _, _) = context(storage.clone()).await;

        auth.login("u2", Some("   ")).await;
        assert_eq!(auth.nickname().as_deref(), Some("Alice"));
        assert_eq!(storage.nickname().await.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let storage = SessionStorage::in_memory();
        let (auth, navigator, queries) = context(storage.clone()).await;
        auth.login("u1", Some("Alice")).await;
        queries
            .fetch(crate::query::points_me_key(), || async { Ok(Points(1500)) })
            .await
            .unwrap();

        auth.logout().await;

        assert_eq!(auth.state(), AuthState::Anonymous);
        assert!(storage.user_id().await.is_none());
        assert!(storage.nickname().await.is_none());
        assert!(queries.cache().is_empty());
        assert_eq!(navigator.last(), Some(("/login".to_string(), true)));
    }
}
