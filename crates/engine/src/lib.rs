//! VoltUp Engine - Session, data fetching and the interactive flows

pub mod auth;
pub mod notify;
pub mod purchase;
pub mod query;
pub mod roulette;
pub mod scope;

#[cfg(test)]
mod testing;

pub use auth::{AuthContext, AuthState, Navigator};
pub use notify::{Toast, ToastCenter, ToastKind, ToastSink};
pub use query::QueryClient;
pub use scope::Scope;
