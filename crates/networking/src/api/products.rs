//! Product catalog

use crate::VoltupClient;
use tracing::debug;
use voltup_core::compat::{self, wire::WireProduct};
use voltup_core::{Product, Result};

/// `GET /v1/products` - includes out-of-stock products
pub async fn fetch_products(client: &VoltupClient) -> Result<Vec<Product>> {
    let body = client.get("/v1/products").await?;
    let products = compat::decode_list::<WireProduct, Product>(&body)?;
    debug!("Fetched {} products", products.len());
    Ok(products)
}
