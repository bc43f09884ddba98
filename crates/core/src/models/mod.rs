//! Canonical data models for VoltUp entities

mod order;
mod points;
mod product;
mod roulette;
mod session;
mod user;

pub use order::*;
pub use points::*;
pub use product::*;
pub use roulette::*;
pub use session::*;
pub use user::*;
