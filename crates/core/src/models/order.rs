//! Order models

use crate::types::Points;
use crate::{Error, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Shown when the backend omits an order's status
pub const ORDER_STATUS_PLACEHOLDER: &str = "Confirmed";

/// Body of `POST /v1/orders` (both fields are integers on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub product_id: i64,
    pub quantity: u32,
}

impl CreateOrderRequest {
    /// Build a request from a catalog id; a zero quantity is sent as 1
    pub fn new(product_id: &str, quantity: u32) -> Result<Self> {
        let product_id = product_id.trim().parse::<i64>().map_err(|_| {
            Error::InvalidData(format!("product id '{}' is not numeric", product_id))
        })?;
        Ok(Self {
            product_id,
            quantity: quantity.max(1),
        })
    }
}

/// Result of `POST /v1/orders`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    #[serde(default)]
    pub order_id: Option<String>,
}

/// One entry of the order history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub used_point: Points,
    pub ordered_at: String,
    pub status: String,
}

impl Order {
    /// Local date-time for display; unparsable values are shown as-is, blank as `-`
    pub fn ordered_at_display(&self) -> String {
        format_timestamp(&self.ordered_at)
    }
}

/// Render a backend timestamp in local time (`2026-10-01 19:00`)
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "-".to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

/// Render a backend date as `YYYY-MM-DD`; unparsable values are shown as-is
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "-".to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw.get(..10).unwrap_or(raw), "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}
