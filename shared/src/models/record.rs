//! Property record models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw property record as handed over by the ingestion collaborator:
/// one field-to-value mapping per parsed tabular row.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

// Field names as they appear in the tabular input format.
pub const FIELD_ADDRESS: &str = "address";
pub const FIELD_ROOF_AREA: &str = "roof_area";
pub const FIELD_PITCH: &str = "pitch";
pub const FIELD_HEIGHT_FT: &str = "height (ft)";
pub const FIELD_ROOF_MATERIAL: &str = "roof_material";
pub const FIELD_CONDITION_SCORE: &str = "roof condition summary score";

/// The fixed repair-area fields and the replacement-cost key each maps to,
/// checked in this order. Repair fields outside this list are ignored.
pub const REPAIR_FIELDS: &[(&str, &str)] = &[
    ("shingle repair area (sqm)", "shingle"),
    ("tile repair area (sqm)", "tile"),
    ("metal repair area (sqm)", "metal"),
];

/// Normalized property record, ephemeral and scoped to one calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyRecord {
    pub address: String,
    /// Square feet
    pub roof_area: Decimal,
    /// Degrees
    pub pitch: Decimal,
    /// Feet
    pub height_ft: Decimal,
    /// Lower-cased for all downstream cost-table lookups
    pub roof_material: String,
    /// 0-100
    pub condition_score: Decimal,
    pub repair_areas: RepairAreas,
}

/// Repair areas (square meters) by material. An absent area is treated as
/// absent, not as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RepairAreas {
    pub shingle: Option<Decimal>,
    pub tile: Option<Decimal>,
    pub metal: Option<Decimal>,
}

impl RepairAreas {
    /// (replacement-cost key, area) pairs in the fixed evaluation order
    pub fn entries(&self) -> [(&'static str, Option<Decimal>); 3] {
        [
            ("shingle", self.shingle),
            ("tile", self.tile),
            ("metal", self.metal),
        ]
    }
}
