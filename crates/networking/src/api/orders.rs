//! Orders: purchase and history

use crate::http::path_segment;
use crate::VoltupClient;
use tracing::{debug, info};
use voltup_core::compat::{self, wire::WireOrder, wire::WireOrderReceipt};
use voltup_core::{CreateOrderRequest, Order, OrderReceipt, Result};

/// `POST /v1/orders`
///
/// The server rejects with `C005` (not enough points) or `C006` (not enough
/// stock); the charge it applies is authoritative.
pub async fn create_order(client: &VoltupClient, product_id: &str, quantity: u32) -> Result<OrderReceipt> {
    let request = CreateOrderRequest::new(product_id, quantity)?;
    info!("Ordering {} x product {}", request.quantity, request.product_id);
    let body = client.post("/v1/orders", Some(&request)).await?;
    compat::decode_object::<WireOrderReceipt, OrderReceipt>(&body)
}

/// `GET /v1/orders/me/{userId}`
pub async fn fetch_my_orders(client: &VoltupClient, user_id: &str) -> Result<Vec<Order>> {
    let path = format!("/v1/orders/me/{}", path_segment(user_id));
    let body = client.get(&path).await?;
    let orders = compat::decode_list::<WireOrder, Order>(&body)?;
    debug!("Fetched {} orders", orders.len());
    Ok(orders)
}
