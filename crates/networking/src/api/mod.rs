//! Resource modules for the VoltUp REST endpoints
//!
//! Each module is a thin typed shim: build the request, call the client,
//! fold the response through the wire compatibility layer into a
//! canonical model.

pub mod auth;
pub mod orders;
pub mod points;
pub mod products;
pub mod roulette;
mod service;
pub mod users;

pub use service::RewardsApi;
