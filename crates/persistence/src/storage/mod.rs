//! Storage adapter for the persisted session
//!
//! The client remembers exactly two things between runs: the user id sent
//! as the identity header and the nickname shown on the home screen. Keys
//! carry an app-specific prefix so they never collide with other data in
//! the same store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::warn;
use voltup_core::{Error, Result, Session};

use crate::sqlite::{self, Database};

/// Key holding the logged-in user id
pub const USER_ID_KEY: &str = "lg_voltup_user_id";

/// Key holding the nickname entered at login
pub const NICKNAME_KEY: &str = "lg_voltup_nickname";

/// A string key/value store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>>;
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;
    async fn remove_item(&self, key: &str) -> Result<()>;
}

#[async_trait]
impl KeyValueStore for Database {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        sqlite::get_item(self.pool(), key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        sqlite::set_item(self.pool(), key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        sqlite::remove_item(self.pool(), key).await
    }
}

/// Process-local store (tests, ephemeral sessions)
#[derive(Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self
            .items
            .read()
            .map_err(|e| Error::StorageError(e.to_string()))?;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| Error::StorageError(e.to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| Error::StorageError(e.to_string()))?;
        items.remove(key);
        Ok(())
    }
}

/// Typed access to the persisted identity.
///
/// Storage failures never reach callers: reads degrade to "absent" and
/// writes are dropped with a warning, so a broken store behaves like a
/// logged-out client rather than a crashed one.
#[derive(Clone)]
pub struct SessionStorage {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// In-memory storage, mostly for tests
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub async fn user_id(&self) -> Option<String> {
        self.read(USER_ID_KEY).await
    }

    pub async fn set_user_id(&self, user_id: &str) {
        self.write(USER_ID_KEY, user_id).await;
    }

    pub async fn clear_user_id(&self) {
        self.delete(USER_ID_KEY).await;
    }

    pub async fn nickname(&self) -> Option<String> {
        self.read(NICKNAME_KEY).await
    }

    pub async fn set_nickname(&self, nickname: &str) {
        self.write(NICKNAME_KEY, nickname).await;
    }

    pub async fn clear_nickname(&self) {
        self.delete(NICKNAME_KEY).await;
    }

    /// The stored session, if a user id is present
    pub async fn load_session(&self) -> Option<Session> {
        let user_id = self.user_id().await?;
        Some(Session::new(user_id, self.nickname().await))
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.store.get_item(key).await {
            Ok(value) => value.filter(|v| !v.trim().is_empty()),
            Err(e) => {
                warn!("Local storage read failed for {}: {}", key, e);
                None
            }
        }
    }

    async fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set_item(key, value).await {
            warn!("Local storage write failed for {}: {}", key, e);
        }
    }

    async fn delete(&self, key: &str) {
        if let Err(e) = self.store.remove_item(key).await {
            warn!("Local storage remove failed for {}: {}", key, e);
        }
    }
}
