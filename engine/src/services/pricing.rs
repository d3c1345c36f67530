//! Quote cost calculation
//!
//! The central pure transformation: (pricing profile, normalized record)
//! to an itemized cost breakdown with a bounded quote range. Deterministic,
//! no hidden state; identical inputs always produce identical results.

use rust_decimal::Decimal;

use crate::services::region::resolve_region_multiplier;
use shared::{classify_slope, CrewScalingRule, PricingProfile, PropertyRecord, QuoteRange, QuoteResult};

/// Work-day normalization for labor hours
const HOURS_PER_WORK_DAY: u32 = 8;

/// Compute the crew size for a job. Sizing only ever adds workers to the
/// configured base: one for roofs over 3000 sqft, a second over 5000 sqft,
/// and at most one more for a steep pitch (> 30 degrees) or a tall
/// structure (> 25 ft).
pub fn crew_size_for(profile: &PricingProfile, record: &PropertyRecord) -> u32 {
    let mut crew_size = profile.base_crew_size;

    // Size-based scaling, cumulative
    if record.roof_area > Decimal::from(3000) {
        crew_size += 1;
    }
    if record.roof_area > Decimal::from(5000) {
        crew_size += 1;
    }

    // Complexity-based scaling. Both rules currently apply it; the match
    // keeps any future divergence an explicit branch.
    match profile.crew_scaling_rule {
        CrewScalingRule::SizeOnly | CrewScalingRule::SizeAndComplexity => {
            if record.pitch > Decimal::from(30) || record.height_ft > Decimal::from(25) {
                crew_size += 1;
            }
        }
    }

    crew_size
}

/// Calculate an itemized quote for a normalized property record.
///
/// The profile must have passed invariant validation; in particular
/// `daily_productivity` is non-zero. Zero-area records yield zero material
/// and labor cost while crew size and region multiplier compute normally.
pub fn calculate_quote(profile: &PricingProfile, record: &PropertyRecord) -> QuoteResult {
    // 1. Base material cost, with the default rate for unknown materials
    let material_cost = record.roof_area * profile.material_costs.rate_for(&record.roof_material);

    // 2-5. Labor cost with crew scaling and slope surcharge
    let crew_size_used = crew_size_for(profile, record);
    let labor_hours =
        record.roof_area / profile.daily_productivity * Decimal::from(HOURS_PER_WORK_DAY);
    let base_labor_cost = labor_hours * profile.labor_rate * Decimal::from(crew_size_used);

    let slope_bucket = classify_slope(record.pitch);
    let surcharge = profile.slope_cost_adjustment.surcharge_for(slope_bucket);
    let labor_cost = base_labor_cost * (Decimal::ONE + surcharge);

    // 6. Repair cost over the fixed repair-area fields
    let mut repair_cost = Decimal::ZERO;
    for (material_key, area) in record.repair_areas.entries() {
        if let Some(area) = area {
            if area > Decimal::ZERO {
                repair_cost += area * profile.replacement_costs.rate_for(material_key);
            }
        }
    }

    // 7. Region is a property of the business's registered service area,
    //    not of the individual job.
    let region_multiplier = resolve_region_multiplier(&profile.primary_zip_code);

    // 8-9. Aggregate with overhead and profit
    let subtotal = (material_cost + labor_cost + repair_cost) * region_multiplier;
    let overhead = subtotal * profile.overhead_percent;
    let profit = (subtotal + overhead) * profile.profit_margin;
    let total = (subtotal + overhead + profit).round_dp(2);

    // 10. Asymmetric quote band: 90% of the point estimate below, 115% above
    let quote_range = QuoteRange::new(
        (total * Decimal::new(90, 2)).round_dp(2),
        (total * Decimal::new(115, 2)).round_dp(2),
    );

    QuoteResult {
        address: record.address.clone(),
        roof_material: record.roof_material.clone(),
        pitch: record.pitch,
        roof_area: record.roof_area,
        crew_size_used,
        region_multiplier,
        material_cost: material_cost.round_dp(2),
        labor_cost: labor_cost.round_dp(2),
        repair_cost: repair_cost.round_dp(2),
        subtotal: subtotal.round_dp(2),
        overhead: overhead.round_dp(2),
        profit: profit.round_dp(2),
        total,
        quote_range,
    }
}
