//! VoltUp Persistence - Local storage and query cache

pub mod cache;
pub mod sqlite;
pub mod storage;

pub use cache::{Cached, QueryCache, QueryKey};
pub use sqlite::Database;
pub use storage::{KeyValueStore, MemoryStore, SessionStorage};
