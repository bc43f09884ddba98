//! Shared type definitions and newtypes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Point amount (the app's virtual currency, never negative)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Points(pub u64);

impl Points {
    pub const ZERO: Points = Points(0);

    pub fn new(amount: u64) -> Self {
        Points(amount)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity, saturating instead of overflowing
    pub fn times(&self, quantity: u32) -> Self {
        Points(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl From<u64> for Points {
    fn from(value: u64) -> Self {
        Points(value)
    }
}

/// Renders as `1,234P`
impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}P", group_thousands(self.0 as i128))
    }
}

/// Insert `,` separators every three digits (`-12345` -> `-12,345`)
pub fn group_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Signed ledger delta as shown in point history (`+100P`, `-1,500P`)
pub fn format_signed_points(amount: i64) -> String {
    if amount >= 0 {
        format!("+{}P", group_thousands(amount as i128))
    } else {
        format!("{}P", group_thousands(amount as i128))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_display_groups_thousands() {
        assert_eq!(Points(0).to_string(), "0P");
        assert_eq!(Points(999).to_string(), "999P");
        assert_eq!(Points(1000).to_string(), "1,000P");
        assert_eq!(Points(1234567).to_string(), "1,234,567P");
    }

    #[test]
    fn test_signed_points() {
        assert_eq!(format_signed_points(100), "+100P");
        assert_eq!(format_signed_points(0), "+0P");
        assert_eq!(format_signed_points(-12500), "-12,500P");
    }

    #[test]
    fn test_times_saturates() {
        assert_eq!(Points(300).times(3), Points(900));
        assert_eq!(Points(u64::MAX).times(2), Points(u64::MAX));
    }
}
