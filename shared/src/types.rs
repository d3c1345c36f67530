//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bounded price band reported to the end customer instead of a single
/// point estimate. The band is asymmetric: `low` is 90% of the point
/// estimate and `high` is 115%.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteRange {
    pub low: Decimal,
    pub high: Decimal,
}

impl QuoteRange {
    pub fn new(low: Decimal, high: Decimal) -> Self {
        Self { low, high }
    }
}

impl std::fmt::Display for QuoteRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            format_currency(self.low),
            format_currency(self.high)
        )
    }
}

/// Format a dollar amount with thousands separators and no cents,
/// e.g. `$24,039`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round();
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
