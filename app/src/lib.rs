//! VoltUp - terminal client for the VoltUp rewards service

pub mod cli;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod views;

pub use state::AppState;
