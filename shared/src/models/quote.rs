//! Quote result models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::QuoteRange;

/// Itemized quote for a single property
///
/// Created once per input record by the cost calculator and never mutated
/// afterward; downstream consumers (storage, documents) only read it.
/// Money fields are rounded to 2 decimal places.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteResult {
    pub address: String,
    pub roof_material: String,
    pub pitch: Decimal,
    pub roof_area: Decimal,
    pub crew_size_used: u32,
    pub region_multiplier: Decimal,
    pub material_cost: Decimal,
    pub labor_cost: Decimal,
    pub repair_cost: Decimal,
    pub subtotal: Decimal,
    pub overhead: Decimal,
    pub profit: Decimal,
    pub total: Decimal,
    pub quote_range: QuoteRange,
}
