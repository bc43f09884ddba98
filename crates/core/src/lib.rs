//! VoltUp Core - Shared data models, types, errors and the wire compatibility shim

pub mod compat;
pub mod errors;
pub mod models;
pub mod types;

pub use errors::*;
pub use models::*;
pub use types::*;
