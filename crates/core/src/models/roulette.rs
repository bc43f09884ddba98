//! Daily roulette models

use crate::types::Points;
use serde::{Deserialize, Serialize};

/// Response from `GET /v1/roulette/status`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouletteStatus {
    pub participated_today: bool,
}

/// Response from `POST /v1/roulette/participate`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouletteResult {
    /// Zero means a miss
    pub granted_point: Points,
}

impl RouletteResult {
    pub fn is_win(&self) -> bool {
        !self.granted_point.is_zero()
    }
}
