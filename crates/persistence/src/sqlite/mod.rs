//! SQLite database management

mod connection;
mod local_storage;

pub use connection::Database;
pub use local_storage::*;
