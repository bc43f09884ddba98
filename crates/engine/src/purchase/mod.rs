//! Product purchase: quantity selection and the order flow

mod flow;
mod quantity;

pub use flow::{PurchaseModal, PurchaseOutcome, PURCHASE_SUCCESS_MESSAGE};
pub use quantity::QuantitySelector;
