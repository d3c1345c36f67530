//! Tests for the batch processor
//!
//! Verifies fail-fast configuration checks, per-record error isolation,
//! and input-order preservation.

use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use quote_engine::{check_profile, run_batch, EngineError};
use shared::{
    CrewScalingRule, MaterialCosts, PricingProfile, RawRecord, ReplacementCosts,
    SlopeCostAdjustment,
};

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn sample_profile() -> PricingProfile {
    PricingProfile {
        id: Uuid::new_v4(),
        business_name: "Test Roofing Co".to_string(),
        license_id: "LIC123456".to_string(),
        primary_zip_code: "11221".to_string(),
        email: "test@roofing.com".to_string(),
        labor_rate: dec("45"),
        daily_productivity: dec("2500"),
        base_crew_size: 3,
        crew_scaling_rule: CrewScalingRule::SizeAndComplexity,
        slope_cost_adjustment: SlopeCostAdjustment::default(),
        material_costs: MaterialCosts::default(),
        replacement_costs: ReplacementCosts::default(),
        overhead_percent: dec("0.1"),
        profit_margin: dec("0.2"),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn raw(value: serde_json::Value) -> RawRecord {
    value.as_object().expect("test record must be an object").clone()
}

// ============================================================================
// Configuration Fail-Fast
// ============================================================================

mod configuration {
    use super::*;

    #[test]
    fn valid_profile_passes_check() {
        assert!(check_profile(&sample_profile()).is_ok());
    }

    #[test]
    fn zero_productivity_fails_the_whole_batch() {
        let mut profile = sample_profile();
        profile.daily_productivity = Decimal::ZERO;

        let records = vec![raw(json!({ "address": "1 Main St" }))];
        let result = run_batch(&profile, &records);

        assert!(matches!(result, Err(EngineError::Configuration(_))));
    }

    #[test]
    fn negative_labor_rate_fails_the_whole_batch() {
        let mut profile = sample_profile();
        profile.labor_rate = dec("-45");

        let result = run_batch(&profile, &[]);
        assert!(matches!(result, Err(EngineError::Configuration(_))));
    }
}

// ============================================================================
// Per-Record Isolation
// ============================================================================

mod isolation {
    use super::*;

    #[test]
    fn one_malformed_record_never_aborts_the_batch() {
        let profile = sample_profile();
        let records = vec![
            raw(json!({ "address": "1 First St" })),
            raw(json!({ "address": "2 Second St", "pitch": "steep" })),
            raw(json!({ "address": "3 Third St" })),
        ];

        let outcome = run_batch(&profile, &records).unwrap();

        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].record_index, 1);
        assert!(outcome.errors[0].reason.contains("pitch"));
    }

    #[test]
    fn missing_address_is_reported_with_its_index() {
        let profile = sample_profile();
        let records = vec![
            raw(json!({ "address": "1 First St" })),
            raw(json!({ "pitch": 20 })),
        ];

        let outcome = run_batch(&profile, &records).unwrap();

        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.errors[0].record_index, 1);
        assert!(outcome.errors[0].reason.contains("address"));
    }

    #[test]
    fn all_records_malformed_yields_only_errors() {
        let profile = sample_profile();
        let records = vec![
            raw(json!({ "roof_area": 100 })),
            raw(json!({ "address": "", "pitch": 10 })),
        ];

        let outcome = run_batch(&profile, &records).unwrap();

        assert!(outcome.results.is_empty());
        assert_eq!(outcome.errors.len(), 2);
        assert_eq!(outcome.errors[0].record_index, 0);
        assert_eq!(outcome.errors[1].record_index, 1);
    }
}

// ============================================================================
// Ordering
// ============================================================================

mod ordering {
    use super::*;

    #[test]
    fn results_preserve_input_order() {
        let profile = sample_profile();
        let records = vec![
            raw(json!({ "address": "1 First St", "roof_area": 8000 })),
            raw(json!({ "address": "2 Second St", "roof_area": 100 })),
            raw(json!({ "address": "3 Third St", "roof_area": 4000 })),
        ];

        let outcome = run_batch(&profile, &records).unwrap();

        let addresses: Vec<&str> = outcome
            .results
            .iter()
            .map(|q| q.address.as_str())
            .collect();
        assert_eq!(addresses, vec!["1 First St", "2 Second St", "3 Third St"]);
    }

    #[test]
    fn surviving_records_keep_relative_order_around_a_failure() {
        let profile = sample_profile();
        let records = vec![
            raw(json!({ "address": "1 First St" })),
            raw(json!({ "roof_area": "bogus", "address": "2 Second St" })),
            raw(json!({ "address": "3 Third St" })),
            raw(json!({ "address": "4 Fourth St" })),
        ];

        let outcome = run_batch(&profile, &records).unwrap();

        let addresses: Vec<&str> = outcome
            .results
            .iter()
            .map(|q| q.address.as_str())
            .collect();
        assert_eq!(addresses, vec!["1 First St", "3 Third St", "4 Fourth St"]);
        assert_eq!(outcome.errors[0].record_index, 1);
    }

    #[test]
    fn empty_batch_is_an_empty_outcome() {
        let profile = sample_profile();
        let outcome = run_batch(&profile, &[]).unwrap();

        assert!(outcome.results.is_empty());
        assert!(outcome.errors.is_empty());
    }
}

// ============================================================================
// Calculation Wiring
// ============================================================================

#[test]
fn batch_results_carry_full_breakdowns() {
    let mut profile = sample_profile();
    profile.primary_zip_code = "10012".to_string();

    let records = vec![raw(json!({
        "address": "123 Test Street, Test City, TC 12345",
        "roof_material": "concrete",
        "pitch": 24.43,
        "height (ft)": 15,
        "roof_area": 2500,
        "roof condition summary score": 80,
    }))];

    let outcome = run_batch(&profile, &records).unwrap();
    let quote = &outcome.results[0];

    assert_eq!(quote.crew_size_used, 3);
    assert_eq!(quote.total, dec("26710.2"));
    assert_eq!(quote.quote_range.low, dec("24039.18"));
    assert_eq!(quote.quote_range.high, dec("30716.73"));
    assert_eq!(quote.quote_range.to_string(), "$24,039 - $30,717");
}
