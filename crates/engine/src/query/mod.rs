//! Data-fetching layer
//!
//! Cache-and-refetch wrappers around the resource calls. Views ask the
//! [`QueryClient`] for data; it answers from the cache while fresh and
//! refetches otherwise. Mutations invalidate keys so the next read refetches.

mod client;

pub use client::{QueryClient, DEFAULT_STALE_TIME};

use voltup_persistence::QueryKey;

/// `["points", "me"]` - balance summary; invalidated after a purchase or a spin
pub fn points_me_key() -> QueryKey {
    QueryKey::new(["points", "me"])
}

/// `["products"]` - catalog; invalidated after a purchase
pub fn products_key() -> QueryKey {
    QueryKey::new(["products"])
}

/// `["roulette", "status"]` - daily eligibility
pub fn roulette_status_key() -> QueryKey {
    QueryKey::new(["roulette", "status"])
}
