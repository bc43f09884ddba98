//! Wire compatibility shim
//!
//! The backend answers the same logical response with either camelCase or
//! snake_case field names, sometimes sends numbers as strings, and may omit
//! fields or return `null` bodies. Every response passes through this module
//! exactly once: raw [`wire`] shapes absorb the variation and convert into
//! the canonical models in [`crate::models`]. Nothing past this boundary ever
//! sees a missing field.

pub mod de;
pub mod wire;

use crate::{Error, Result};
use serde::de::DeserializeOwned;

/// Version of the response contract this shim understands.
/// Bump when the backend contract changes shape.
pub const WIRE_VERSION: u32 = 1;

/// Decode a single-object response body.
///
/// An empty or `null` body yields the wire type's defaults.
pub fn decode_object<W, T>(body: &[u8]) -> Result<T>
where
    W: DeserializeOwned + Default + Into<T>,
{
    if is_blank(body) {
        return Ok(W::default().into());
    }
    let wire: Option<W> = serde_json::from_slice(body).map_err(|e| {
        Error::InvalidData(format!("wire v{}: {}", WIRE_VERSION, e))
    })?;
    Ok(wire.unwrap_or_default().into())
}

/// Decode a list response body.
///
/// Anything that is not a JSON array (null, object, empty body) yields an
/// empty list. Elements that fail to decode are an error.
pub fn decode_list<W, T>(body: &[u8]) -> Result<Vec<T>>
where
    W: DeserializeOwned + Into<T>,
{
    if is_blank(body) {
        return Ok(Vec::new());
    }
    let value: serde_json::Value = serde_json::from_slice(body)?;
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| {
                serde_json::from_value::<W>(item)
                    .map(Into::into)
                    .map_err(|e| Error::InvalidData(format!("wire v{}: {}", WIRE_VERSION, e)))
            })
            .collect(),
        _ => Ok(Vec::new()),
    }
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

#[cfg(test)]
mod tests {
    use super::wire::*;
    use super::*;
    use crate::models::*;
    use crate::types::Points;

    fn same<W, T>(camel: &str, snake: &str) -> (T, T)
    where
        W: DeserializeOwned + Default + Into<T>,
    {
        (
            decode_object::<W, T>(camel.as_bytes()).unwrap(),
            decode_object::<W, T>(snake.as_bytes()).unwrap(),
        )
    }

    #[test]
    fn test_points_summary_casing_equivalence() {
        let (a, b) = same::<WirePointsSummary, PointsSummary>(
            r#"{"availableBalance": 1500, "expiringWithin7Days": 200}"#,
            r#"{"available_balance": "1500", "expiring_within_7_days": 200}"#,
        );
        assert_eq!(a, b);
        assert_eq!(a.available_balance, Points(1500));
        assert_eq!(a.expiring_within_7_days, Points(200));
    }

    #[test]
    fn test_points_detail_casing_equivalence() {
        let (a, b) = same::<WirePointsDetail, PointsDetail>(
            r#"{"totalBalance": 300, "histories": [{"description": "Roulette", "amount": 100, "expiryDate": "2026-11-01"}]}"#,
            r#"{"total_balance": 300, "histories": [{"description": "Roulette", "amount": "100", "expiry_date": "2026-11-01"}]}"#,
        );
        assert_eq!(a, b);
        assert_eq!(a.histories.len(), 1);
        assert_eq!(a.histories[0].amount, 100);
    }

    #[test]
    fn test_roulette_result_casing_equivalence() {
        let (a, b) = same::<WireRouletteResult, RouletteResult>(
            r#"{"grantedPoint": 50}"#,
            r#"{"granted_point": 50}"#,
        );
        assert_eq!(a, b);
        assert_eq!(a.granted_point, Points(50));
    }

    #[test]
    fn test_roulette_status_casing_equivalence() {
        let (a, b) = same::<WireRouletteStatus, RouletteStatus>(
            r#"{"participatedToday": true}"#,
            r#"{"participated_today": true}"#,
        );
        assert_eq!(a, b);
        assert!(a.participated_today);
    }

    #[test]
    fn test_product_list_casing_equivalence() {
        let camel = decode_list::<WireProduct, Product>(
            br#"[{"id": 7, "name": "Coffee", "pointPrice": 300, "stock": 4, "imageUrl": "https://img/c.png"}]"#,
        )
        .unwrap();
        let snake = decode_list::<WireProduct, Product>(
            br#"[{"id": "7", "name": "Coffee", "point_price": "300", "stock": "4", "image_url": "https://img/c.png"}]"#,
        )
        .unwrap();
        assert_eq!(camel, snake);
        assert_eq!(camel[0].id, "7");
        assert_eq!(camel[0].point_price, Points(300));
    }

    #[test]
    fn test_order_list_casing_equivalence() {
        let camel = decode_list::<WireOrder, Order>(
            br#"[{"orderId": 1, "productName": "Coffee", "quantity": 2, "usedPoint": 600, "orderedAt": "2026-10-01T10:00:00Z", "status": "COMPLETED"}]"#,
        )
        .unwrap();
        let snake = decode_list::<WireOrder, Order>(
            br#"[{"order_id": "1", "product_name": "Coffee", "quantity": 2, "used_point": 600, "ordered_at": "2026-10-01T10:00:00Z", "status": "COMPLETED"}]"#,
        )
        .unwrap();
        assert_eq!(camel, snake);
    }

    #[test]
    fn test_missing_status_defaults_to_placeholder() {
        let orders = decode_list::<WireOrder, Order>(
            br#"[{"orderId": 1, "productName": "Tea", "quantity": 1, "usedPoint": 10, "orderedAt": ""}, {"orderId": 2, "status": "  "}]"#,
        )
        .unwrap();
        assert_eq!(orders[0].status, ORDER_STATUS_PLACEHOLDER);
        assert_eq!(orders[1].status, ORDER_STATUS_PLACEHOLDER);
        assert_eq!(orders[1].product_name, "");
    }

    #[test]
    fn test_null_and_empty_bodies_default() {
        let summary = decode_object::<WirePointsSummary, PointsSummary>(b"null").unwrap();
        assert_eq!(summary, PointsSummary::default());
        let summary = decode_object::<WirePointsSummary, PointsSummary>(b"").unwrap();
        assert_eq!(summary, PointsSummary::default());
        let detail = decode_object::<WirePointsDetail, PointsDetail>(b"{}").unwrap();
        assert!(detail.histories.is_empty());
    }

    #[test]
    fn test_non_array_list_is_empty() {
        let products = decode_list::<WireProduct, Product>(br#"{"items": []}"#).unwrap();
        assert!(products.is_empty());
        let orders = decode_list::<WireOrder, Order>(b"null").unwrap();
        assert!(orders.is_empty());
    }

    #[test]
    fn test_negative_balance_coerces_to_zero() {
        let summary = decode_object::<WirePointsSummary, PointsSummary>(
            br#"{"availableBalance": -40, "expiringWithin7Days": "abc"}"#,
        )
        .unwrap();
        assert_eq!(summary.available_balance, Points::ZERO);
        assert_eq!(summary.expiring_within_7_days, Points::ZERO);
    }

    #[test]
    fn test_malformed_json_is_invalid_data() {
        let err = decode_object::<WirePointsSummary, PointsSummary>(b"{not json").unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }
}
