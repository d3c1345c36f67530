//! Regional cost multiplier keyed by ZIP-code prefix

use rust_decimal::Decimal;

/// ZIP prefixes billed at the high-cost multiplier
const HIGH_COST_PREFIXES: &[&str] = &["100", "90", "94", "11"];

/// ZIP prefixes billed at the low-cost multiplier
const LOW_COST_PREFIXES: &[&str] = &["83", "59", "35", "73"];

fn high_cost_multiplier() -> Decimal {
    Decimal::new(125, 2)
}

fn low_cost_multiplier() -> Decimal {
    Decimal::new(85, 2)
}

/// Resolve the regional cost multiplier for a ZIP code.
///
/// Malformed or empty values fail every prefix test and resolve to the
/// neutral multiplier; no error is possible.
pub fn resolve_region_multiplier(zip_code: &str) -> Decimal {
    resolve_against(HIGH_COST_PREFIXES, LOW_COST_PREFIXES, zip_code)
}

/// Prefix lookup over explicit lists. The high-cost list is checked first
/// and must win whenever a ZIP could match both lists.
fn resolve_against(high: &[&str], low: &[&str], zip_code: &str) -> Decimal {
    if high.iter().any(|p| zip_code.starts_with(p)) {
        high_cost_multiplier()
    } else if low.iter().any(|p| zip_code.starts_with(p)) {
        low_cost_multiplier()
    } else {
        Decimal::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_cost_prefixes_resolve() {
        assert_eq!(resolve_region_multiplier("10012"), Decimal::new(125, 2));
        assert_eq!(resolve_region_multiplier("90210"), Decimal::new(125, 2));
        assert_eq!(resolve_region_multiplier("94105"), Decimal::new(125, 2));
        assert_eq!(resolve_region_multiplier("11221"), Decimal::new(125, 2));
    }

    #[test]
    fn low_cost_prefixes_resolve() {
        assert_eq!(resolve_region_multiplier("83702"), Decimal::new(85, 2));
        assert_eq!(resolve_region_multiplier("59801"), Decimal::new(85, 2));
        assert_eq!(resolve_region_multiplier("35203"), Decimal::new(85, 2));
        assert_eq!(resolve_region_multiplier("73102"), Decimal::new(85, 2));
    }

    #[test]
    fn unmapped_prefix_is_neutral() {
        assert_eq!(resolve_region_multiplier("60601"), Decimal::ONE);
        assert_eq!(resolve_region_multiplier("02110"), Decimal::ONE);
    }

    #[test]
    fn malformed_zip_is_neutral() {
        assert_eq!(resolve_region_multiplier(""), Decimal::ONE);
        assert_eq!(resolve_region_multiplier("not-a-zip"), Decimal::ONE);
    }

    #[test]
    fn high_cost_wins_when_both_lists_match() {
        // The shipped lists never overlap; the precedence rule must hold
        // even if a future list change makes them overlap.
        let multiplier = resolve_against(&["12"], &["123"], "12345");
        assert_eq!(multiplier, Decimal::new(125, 2));

        let multiplier = resolve_against(&["123"], &["12"], "12345");
        assert_eq!(multiplier, Decimal::new(125, 2));
    }
}
