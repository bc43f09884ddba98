//! Product catalog model

use crate::types::Points;
use serde::{Deserialize, Serialize};

/// A redeemable product; out-of-stock items are still listed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub point_price: Points,
    pub stock: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}
