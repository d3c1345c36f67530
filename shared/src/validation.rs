//! Validation utilities for the Roofing Quote Platform
//!
//! Profile invariants are checked here; the engine refuses to start a batch
//! on a profile that fails them.

use rust_decimal::Decimal;

use crate::models::PricingProfile;

// ============================================================================
// Pricing Profile Validations
// ============================================================================

/// Validate pricing profile invariants.
///
/// Percentage fields are expected as multiplier fractions (0.1 = 10%);
/// rates and productivity must be strictly positive.
pub fn validate_pricing_profile(profile: &PricingProfile) -> Result<(), &'static str> {
    if profile.labor_rate <= Decimal::ZERO {
        return Err("Labor rate must be positive");
    }
    if profile.daily_productivity <= Decimal::ZERO {
        return Err("Daily productivity must be positive");
    }
    if profile.base_crew_size == 0 {
        return Err("Base crew size must be positive");
    }
    if profile.overhead_percent < Decimal::ZERO {
        return Err("Overhead percent cannot be negative");
    }
    if profile.profit_margin < Decimal::ZERO {
        return Err("Profit margin cannot be negative");
    }

    let slope = &profile.slope_cost_adjustment;
    if slope.flat_low < Decimal::ZERO
        || slope.moderate < Decimal::ZERO
        || slope.steep < Decimal::ZERO
        || slope.very_steep < Decimal::ZERO
    {
        return Err("Slope surcharges cannot be negative");
    }

    if profile.material_costs.0.values().any(|c| *c < Decimal::ZERO) {
        return Err("Material costs cannot be negative");
    }
    if profile
        .replacement_costs
        .0
        .values()
        .any(|c| *c < Decimal::ZERO)
    {
        return Err("Replacement costs cannot be negative");
    }

    Ok(())
}

// ============================================================================
// Onboarding Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate US ZIP code format: 5 digits, optionally ZIP+4
pub fn validate_zip_code(zip: &str) -> Result<(), &'static str> {
    let (main, plus4) = match zip.split_once('-') {
        Some((m, p)) => (m, Some(p)),
        None => (zip, None),
    };

    if main.len() != 5 || !main.chars().all(|c| c.is_ascii_digit()) {
        return Err("ZIP code must be 5 digits");
    }
    if let Some(p) = plus4 {
        if p.len() != 4 || !p.chars().all(|c| c.is_ascii_digit()) {
            return Err("ZIP+4 extension must be 4 digits");
        }
    }
    Ok(())
}

/// Validate contractor license ID format (5-20 alphanumeric, dashes allowed)
pub fn validate_license_id(license: &str) -> Result<(), &'static str> {
    if license.len() < 5 {
        return Err("License ID must be at least 5 characters");
    }
    if license.len() > 20 {
        return Err("License ID must be at most 20 characters");
    }
    if !license
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err("License ID must be alphanumeric");
    }
    Ok(())
}
