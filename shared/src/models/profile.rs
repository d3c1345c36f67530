//! Pricing profile models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Crew scaling policies a business can choose at onboarding
///
/// Both variants currently size crews identically; the variant exists so a
/// future divergence is an explicit, type-checked branch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CrewScalingRule {
    SizeOnly,
    SizeAndComplexity,
}

/// Pitch-angle bands carrying a labor surcharge fraction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SlopeBucket {
    /// pitch <= 15 degrees
    FlatLow,
    /// 15 < pitch <= 30 degrees
    Moderate,
    /// 30 < pitch <= 45 degrees
    Steep,
    /// pitch > 45 degrees
    VerySteep,
}

impl std::fmt::Display for SlopeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlopeBucket::FlatLow => write!(f, "Flat / Low"),
            SlopeBucket::Moderate => write!(f, "Moderate"),
            SlopeBucket::Steep => write!(f, "Steep"),
            SlopeBucket::VerySteep => write!(f, "Very Steep"),
        }
    }
}

/// Classify a roof pitch (degrees) into its slope bucket.
/// Upper bounds are inclusive: 15.0 is still flat/low, 45.0 is still steep.
pub fn classify_slope(pitch: Decimal) -> SlopeBucket {
    if pitch <= Decimal::from(15) {
        SlopeBucket::FlatLow
    } else if pitch <= Decimal::from(30) {
        SlopeBucket::Moderate
    } else if pitch <= Decimal::from(45) {
        SlopeBucket::Steep
    } else {
        SlopeBucket::VerySteep
    }
}

/// Labor surcharge fractions per slope bucket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlopeCostAdjustment {
    pub flat_low: Decimal,
    pub moderate: Decimal,
    pub steep: Decimal,
    pub very_steep: Decimal,
}

impl SlopeCostAdjustment {
    /// Surcharge fraction for a bucket (0.1 = 10% on labor)
    pub fn surcharge_for(&self, bucket: SlopeBucket) -> Decimal {
        match bucket {
            SlopeBucket::FlatLow => self.flat_low,
            SlopeBucket::Moderate => self.moderate,
            SlopeBucket::Steep => self.steep,
            SlopeBucket::VerySteep => self.very_steep,
        }
    }
}

impl Default for SlopeCostAdjustment {
    fn default() -> Self {
        Self {
            flat_low: Decimal::ZERO,
            moderate: Decimal::new(1, 1),
            steep: Decimal::new(2, 1),
            very_steep: Decimal::new(3, 1),
        }
    }
}

/// Install costs per square foot by material name (lower-cased keys).
/// Open vocabulary: unknown materials fall back to the default rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialCosts(pub HashMap<String, Decimal>);

impl MaterialCosts {
    /// Fallback install cost per square foot for unlisted materials
    pub fn default_rate() -> Decimal {
        Decimal::from(5)
    }

    /// Install cost per square foot for a material, case-insensitive
    pub fn rate_for(&self, material: &str) -> Decimal {
        self.0
            .get(&material.to_lowercase())
            .copied()
            .unwrap_or_else(Self::default_rate)
    }
}

impl Default for MaterialCosts {
    fn default() -> Self {
        let mut costs = HashMap::new();
        costs.insert("asphalt".to_string(), Decimal::new(40, 1));
        costs.insert("shingle".to_string(), Decimal::new(45, 1));
        costs.insert("metal".to_string(), Decimal::from(7));
        costs.insert("tile".to_string(), Decimal::from(8));
        costs.insert("concrete".to_string(), Decimal::from(6));
        Self(costs)
    }
}

/// Replacement costs per square meter for damaged materials,
/// used only for repair-area line items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplacementCosts(pub HashMap<String, Decimal>);

impl ReplacementCosts {
    /// Fallback replacement cost per square meter for unlisted materials
    pub fn default_rate() -> Decimal {
        Decimal::from(50)
    }

    /// Replacement cost per square meter for a material, case-insensitive
    pub fn rate_for(&self, material: &str) -> Decimal {
        self.0
            .get(&material.to_lowercase())
            .copied()
            .unwrap_or_else(Self::default_rate)
    }
}

impl Default for ReplacementCosts {
    fn default() -> Self {
        let mut costs = HashMap::new();
        costs.insert("asphalt".to_string(), Decimal::from(45));
        costs.insert("shingle".to_string(), Decimal::from(50));
        costs.insert("metal".to_string(), Decimal::from(90));
        costs.insert("tile".to_string(), Decimal::from(70));
        costs.insert("concrete".to_string(), Decimal::from(60));
        Self(costs)
    }
}

/// A business's configured cost and margin parameters
///
/// Created at onboarding and mutated only by explicit profile updates; the
/// engine reads it and never writes to it. Percentage fields hold the actual
/// multiplier fraction (0.1 = 10%, never 10); the onboarding collaborator
/// converts before the profile reaches the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingProfile {
    pub id: Uuid,
    pub business_name: String,
    pub license_id: String,
    /// ZIP of the business's registered service area; drives the region
    /// multiplier for every job the business quotes.
    pub primary_zip_code: String,
    pub email: String,
    /// Currency per hour per worker, > 0
    pub labor_rate: Decimal,
    /// Square feet per day per crew, > 0
    pub daily_productivity: Decimal,
    pub base_crew_size: u32,
    pub crew_scaling_rule: CrewScalingRule,
    pub slope_cost_adjustment: SlopeCostAdjustment,
    pub material_costs: MaterialCosts,
    pub replacement_costs: ReplacementCosts,
    /// Fraction applied to the subtotal
    pub overhead_percent: Decimal,
    /// Fraction applied after overhead
    pub profit_margin: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
