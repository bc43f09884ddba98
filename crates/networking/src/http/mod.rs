//! HTTP transport: configuration and the identity-aware client

mod client;
mod config;

pub use client::*;
pub use config::*;
