//! Application state management

use crate::config::AppConfig;
use crate::router::Router;
use std::sync::Arc;
use tracing::info;
use voltup_core::Result;
use voltup_engine::{AuthContext, QueryClient, ToastCenter};
use voltup_networking::{RewardsApi, VoltupClient};
use voltup_persistence::{Database, SessionStorage};

/// Everything a page needs, shared by reference
#[derive(Clone)]
pub struct AppState {
    pub storage: SessionStorage,
    pub api: Arc<dyn RewardsApi>,
    pub queries: Arc<QueryClient>,
    pub auth: Arc<AuthContext>,
    pub router: Arc<Router>,
    pub toasts: Arc<ToastCenter>,
}

impl AppState {
    /// Open local storage on disk and connect to the configured backend
    pub async fn open(config: &AppConfig) -> Result<Self> {
        let db = Database::connect(&config.database_path()).await?;
        let storage = SessionStorage::new(Arc::new(db));
        let client = VoltupClient::new(&config.api, storage.clone())?;

        info!("Using API at {} ({:?})", client.base_url(), config.api.environment);
        Ok(Self::assemble(Arc::new(client), storage).await)
    }

    /// Wire the state around any API implementation
    pub async fn assemble(api: Arc<dyn RewardsApi>, storage: SessionStorage) -> Self {
        let queries = Arc::new(QueryClient::new());
        let router = Arc::new(Router::new("/"));
        let auth = AuthContext::restore(storage.clone(), router.clone(), queries.clone()).await;

        Self {
            storage,
            api,
            queries,
            auth: Arc::new(auth),
            router,
            toasts: Arc::new(ToastCenter::new()),
        }
    }
}
