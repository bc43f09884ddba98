//! Point balance models

use crate::types::Points;
use serde::{Deserialize, Serialize};

/// Balance summary shown at the top of the home screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsSummary {
    pub available_balance: Points,
    pub expiring_within_7_days: Points,
}

/// One line of the point ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointHistoryEntry {
    pub description: String,
    /// Signed delta: accruals are positive, usage is negative
    pub amount: i64,
    pub expiry_date: Option<String>,
}

/// Total balance plus ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsDetail {
    pub total_balance: Points,
    pub histories: Vec<PointHistoryEntry>,
}
