//! VoltUp Networking - HTTP client and REST resource wrappers

pub mod api;
pub mod http;

pub use api::RewardsApi;
pub use http::{ApiConfig, Environment, VoltupClient, USER_ID_HEADER};
