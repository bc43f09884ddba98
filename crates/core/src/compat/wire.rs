//! Raw response shapes (wire v1)
//!
//! Each field accepts its camelCase name and its snake_case alias.

use super::de;
use crate::models::*;
use crate::types::Points;
use serde::Deserialize;

/// `POST /v1/auth/login`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WireAuthLogin {
    #[serde(alias = "user_id", deserialize_with = "de::id")]
    pub user_id: String,
}

impl From<WireAuthLogin> for AuthLogin {
    fn from(w: WireAuthLogin) -> Self {
        AuthLogin {
            user_id: w.user_id.trim().to_string(),
        }
    }
}

/// `POST /v1/users`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WireCreatedUser {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(alias = "login_id", deserialize_with = "de::id")]
    pub login_id: String,
    #[serde(deserialize_with = "de::id")]
    pub name: String,
}

impl From<WireCreatedUser> for CreatedUser {
    fn from(w: WireCreatedUser) -> Self {
        CreatedUser {
            id: w.id,
            login_id: w.login_id,
            name: w.name,
        }
    }
}

/// `GET /v1/points/me`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WirePointsSummary {
    #[serde(alias = "available_balance", deserialize_with = "de::points")]
    pub available_balance: u64,
    #[serde(alias = "expiring_within_7_days", deserialize_with = "de::points")]
    pub expiring_within_7_days: u64,
}

impl From<WirePointsSummary> for PointsSummary {
    fn from(w: WirePointsSummary) -> Self {
        PointsSummary {
            available_balance: Points(w.available_balance),
            expiring_within_7_days: Points(w.expiring_within_7_days),
        }
    }
}

/// One ledger line in `GET /v1/points/me/{userId}`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WirePointHistory {
    #[serde(deserialize_with = "de::id")]
    pub description: String,
    #[serde(deserialize_with = "de::signed")]
    pub amount: i64,
    #[serde(alias = "expiry_date", deserialize_with = "de::opt_text")]
    pub expiry_date: Option<String>,
}

impl From<WirePointHistory> for PointHistoryEntry {
    fn from(w: WirePointHistory) -> Self {
        PointHistoryEntry {
            description: w.description.trim().to_string(),
            amount: w.amount,
            expiry_date: w.expiry_date,
        }
    }
}

/// `GET /v1/points/me/{userId}`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WirePointsDetail {
    #[serde(alias = "total_balance", deserialize_with = "de::points")]
    pub total_balance: u64,
    #[serde(alias = "point_histories", deserialize_with = "histories")]
    pub histories: Vec<WirePointHistory>,
}

/// `histories` may be null or missing; both mean "no entries"
fn histories<'de, D>(deserializer: D) -> Result<Vec<WirePointHistory>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<WirePointHistory>>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<WirePointsDetail> for PointsDetail {
    fn from(w: WirePointsDetail) -> Self {
        PointsDetail {
            total_balance: Points(w.total_balance),
            histories: w.histories.into_iter().map(Into::into).collect(),
        }
    }
}

/// Element of `GET /v1/products`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WireProduct {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(deserialize_with = "de::id")]
    pub name: String,
    #[serde(alias = "point_price", deserialize_with = "de::points")]
    pub point_price: u64,
    #[serde(deserialize_with = "de::count")]
    pub stock: u32,
    #[serde(alias = "image_url", deserialize_with = "de::opt_text")]
    pub image_url: Option<String>,
}

impl From<WireProduct> for Product {
    fn from(w: WireProduct) -> Self {
        Product {
            id: w.id,
            name: w.name,
            point_price: Points(w.point_price),
            stock: w.stock,
            image_url: w.image_url,
        }
    }
}

/// `POST /v1/orders`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WireOrderReceipt {
    #[serde(alias = "order_id", deserialize_with = "de::opt_text")]
    pub order_id: Option<String>,
}

impl From<WireOrderReceipt> for OrderReceipt {
    fn from(w: WireOrderReceipt) -> Self {
        OrderReceipt { order_id: w.order_id }
    }
}

/// Element of `GET /v1/orders/me/{userId}`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WireOrder {
    #[serde(alias = "order_id", deserialize_with = "de::id")]
    pub order_id: String,
    #[serde(alias = "product_name", deserialize_with = "de::id")]
    pub product_name: String,
    #[serde(deserialize_with = "de::count")]
    pub quantity: u32,
    #[serde(alias = "used_point", deserialize_with = "de::points")]
    pub used_point: u64,
    #[serde(alias = "ordered_at", deserialize_with = "de::id")]
    pub ordered_at: String,
    #[serde(deserialize_with = "de::opt_text")]
    pub status: Option<String>,
}

impl From<WireOrder> for Order {
    fn from(w: WireOrder) -> Self {
        Order {
            order_id: w.order_id,
            product_name: w.product_name,
            quantity: w.quantity,
            used_point: Points(w.used_point),
            ordered_at: w.ordered_at,
            status: w
                .status
                .unwrap_or_else(|| ORDER_STATUS_PLACEHOLDER.to_string()),
        }
    }
}

/// `GET /v1/roulette/status`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WireRouletteStatus {
    #[serde(alias = "participated_today", deserialize_with = "de::flag")]
    pub participated_today: bool,
}

impl From<WireRouletteStatus> for RouletteStatus {
    fn from(w: WireRouletteStatus) -> Self {
        RouletteStatus {
            participated_today: w.participated_today,
        }
    }
}

/// `POST /v1/roulette/participate`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WireRouletteResult {
    #[serde(alias = "granted_point", deserialize_with = "de::points")]
    pub granted_point: u64,
}

impl From<WireRouletteResult> for RouletteResult {
    fn from(w: WireRouletteResult) -> Self {
        RouletteResult {
            granted_point: Points(w.granted_point),
        }
    }
}
