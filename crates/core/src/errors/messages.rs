//! Error-code → user-facing message tables
//!
//! Users never see raw codes like `C005`; every failure surfaced to a toast
//! or inline text goes through one of these lookups.

use super::Error;

/// Domain error codes the backend is known to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// `C005` - not enough points for the order
    InsufficientPoints,
    /// `C006` - not enough stock for the requested quantity
    InsufficientStock,
    /// `C007` - roulette already played today
    AlreadyParticipated,
    /// `C011` - today's roulette budget is exhausted
    BudgetExhausted,
}

impl ErrorCode {
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "C005" => Some(ErrorCode::InsufficientPoints),
            "C006" => Some(ErrorCode::InsufficientStock),
            "C007" => Some(ErrorCode::AlreadyParticipated),
            "C011" => Some(ErrorCode::BudgetExhausted),
            _ => None,
        }
    }
}

const ORDER_ERROR_MESSAGES: &[(&str, &str)] = &[
    (
        "C005",
        "You don't have enough points. Earn more points and try again.",
    ),
    (
        "C006",
        "This product doesn't have enough stock. Lower the quantity or try again later.",
    ),
];

const ROULETTE_ERROR_MESSAGES: &[(&str, &str)] = &[
    (
        "C007",
        "You already played today. Come back tomorrow!",
    ),
    (
        "C011",
        "Sorry, today's point budget has run out and no points can be granted.",
    ),
];

/// Fallback when an order fails for an unknown reason
pub const ORDER_FALLBACK_MESSAGE: &str =
    "Something went wrong while placing your order. Please try again shortly.";

/// Fallback when a roulette call fails for an unknown reason
pub const ROULETTE_FALLBACK_MESSAGE: &str =
    "A temporary error occurred. Please try again shortly.";

/// Fallback when login fails without a server message
pub const LOGIN_FALLBACK_MESSAGE: &str = "Login failed. Please try again.";

/// Fallback for read-only views (history, detail)
pub const LOAD_FALLBACK_MESSAGE: &str = "Failed to load. Please try again.";

fn lookup(table: &[(&str, &'static str)], code: &str) -> Option<&'static str> {
    table.iter().find(|(c, _)| *c == code).map(|(_, m)| *m)
}

/// Resolve a message: table hit, else server text, else fallback.
/// Transport failures always resolve to the fallback.
fn translate(err: &Error, table: &[(&str, &'static str)], fallback: &str) -> String {
    if !err.is_api_error() {
        return fallback.to_string();
    }
    if let Some(msg) = err.code().and_then(|code| lookup(table, code)) {
        return msg.to_string();
    }
    err.server_message()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

/// Toast text for a failed purchase
pub fn order_error_message(err: &Error) -> String {
    translate(err, ORDER_ERROR_MESSAGES, ORDER_FALLBACK_MESSAGE)
}

/// Inline text for a failed roulette spin
pub fn roulette_error_message(err: &Error) -> String {
    translate(err, ROULETTE_ERROR_MESSAGES, ROULETTE_FALLBACK_MESSAGE)
}

/// Inline text for a failed login (server text, else fallback)
pub fn login_error_message(err: &Error) -> String {
    err.server_message()
        .map(str::to_string)
        .unwrap_or_else(|| LOGIN_FALLBACK_MESSAGE.to_string())
}

/// Inline text for a failed read-only load
pub fn load_error_message(err: &Error) -> String {
    match err {
        Error::ApiError { .. } => err
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| LOAD_FALLBACK_MESSAGE.to_string()),
        other => other.to_string(),
    }
}

/// Whether the backend rejected a spin because the user already played today
pub fn is_already_participated(err: &Error) -> bool {
    err.code().and_then(ErrorCode::parse) == Some(ErrorCode::AlreadyParticipated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiErrorBody;

    fn api(code: Option<&str>, message: Option<&str>) -> Error {
        Error::ApiError {
            status: 400,
            body: ApiErrorBody {
                code: code.map(str::to_string),
                message: message.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_order_codes_use_table() {
        let msg = order_error_message(&api(Some("C005"), Some("server says no")));
        assert!(msg.contains("enough points"));
        let msg = order_error_message(&api(Some("C006"), None));
        assert!(msg.contains("stock"));
    }

    #[test]
    fn test_unknown_code_uses_server_message() {
        let msg = order_error_message(&api(Some("C999"), Some("  Product closed  ")));
        assert_eq!(msg, "Product closed");
    }

    #[test]
    fn test_blank_message_falls_back() {
        assert_eq!(order_error_message(&api(None, Some("   "))), ORDER_FALLBACK_MESSAGE);
        assert_eq!(roulette_error_message(&api(None, None)), ROULETTE_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_network_error_is_generic() {
        let err = Error::NetworkError("connection refused".into());
        assert_eq!(roulette_error_message(&err), ROULETTE_FALLBACK_MESSAGE);
        assert_eq!(order_error_message(&err), ORDER_FALLBACK_MESSAGE);
        assert!(!is_already_participated(&err));
    }

    #[test]
    fn test_roulette_tables_are_separate_from_orders() {
        // C007 only means something to the roulette
        assert_eq!(order_error_message(&api(Some("C007"), None)), ORDER_FALLBACK_MESSAGE);
        assert!(roulette_error_message(&api(Some("C007"), None)).contains("already played"));
        assert!(roulette_error_message(&api(Some("C011"), None)).contains("budget"));
    }

    #[test]
    fn test_already_participated_detection() {
        assert!(is_already_participated(&api(Some("C007"), None)));
        assert!(!is_already_participated(&api(Some("C011"), None)));
    }
}
