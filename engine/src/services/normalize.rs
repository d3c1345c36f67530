//! Record normalization with documented defaults
//!
//! Fills missing or null primary fields on a raw property record, lower-cases
//! the material name, and coerces field values into engine types. Absent and
//! blank values are treated as missing, never as zero; a non-empty value that
//! cannot be coerced is a per-record validation error.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use shared::{
    PropertyRecord, RawRecord, RepairAreas, FIELD_ADDRESS, FIELD_CONDITION_SCORE, FIELD_HEIGHT_FT,
    FIELD_PITCH, FIELD_ROOF_AREA, FIELD_ROOF_MATERIAL, REPAIR_FIELDS,
};

/// Material assumed when the record does not name one
pub const DEFAULT_ROOF_MATERIAL: &str = "asphalt";

/// Roof area (sqft) assumed when the record does not carry one
pub fn default_roof_area() -> Decimal {
    Decimal::from(2500)
}

/// Pitch (degrees) assumed when the record does not carry one
pub fn default_pitch() -> Decimal {
    Decimal::from(15)
}

/// Height (feet) assumed when the record does not carry one
pub fn default_height_ft() -> Decimal {
    Decimal::from(15)
}

/// Condition score assumed when the record does not carry one
pub fn default_condition_score() -> Decimal {
    Decimal::from(80)
}

/// Normalize a raw property record for quote calculation.
///
/// Fails only on a missing or blank address, or on a field value that
/// cannot be coerced; absent fields take the documented defaults.
pub fn normalize(raw: &RawRecord) -> EngineResult<PropertyRecord> {
    let address = required_string(raw, FIELD_ADDRESS)?;

    let roof_area = optional_decimal(raw, FIELD_ROOF_AREA)?.unwrap_or_else(default_roof_area);
    let pitch = optional_decimal(raw, FIELD_PITCH)?.unwrap_or_else(default_pitch);
    let height_ft = optional_decimal(raw, FIELD_HEIGHT_FT)?.unwrap_or_else(default_height_ft);
    let condition_score =
        optional_decimal(raw, FIELD_CONDITION_SCORE)?.unwrap_or_else(default_condition_score);

    let roof_material = optional_string(raw, FIELD_ROOF_MATERIAL)?
        .unwrap_or_else(|| DEFAULT_ROOF_MATERIAL.to_string())
        .to_lowercase();

    let mut repair_areas = RepairAreas::default();
    for (field, material_key) in REPAIR_FIELDS {
        let area = optional_decimal(raw, field)?;
        match *material_key {
            "shingle" => repair_areas.shingle = area,
            "tile" => repair_areas.tile = area,
            "metal" => repair_areas.metal = area,
            // Repair fields outside the fixed set are ignored, not guessed at.
            _ => {}
        }
    }

    Ok(PropertyRecord {
        address,
        roof_area,
        pitch,
        height_ft,
        roof_material,
        condition_score,
        repair_areas,
    })
}

/// Read a field that identifies the record and must be present
fn required_string(raw: &RawRecord, field: &str) -> EngineResult<String> {
    match optional_string(raw, field)? {
        Some(s) => Ok(s),
        None => Err(EngineError::validation(field, "field is required")),
    }
}

/// Read an optional string field; blank strings count as absent
fn optional_string(raw: &RawRecord, field: &str) -> EngineResult<Option<String>> {
    match raw.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Some(other) => Err(EngineError::validation(
            field,
            format!("expected a string, got {}", type_name(other)),
        )),
    }
}

/// Read an optional numeric field; blank strings count as absent
fn optional_decimal(raw: &RawRecord, field: &str) -> EngineResult<Option<Decimal>> {
    match raw.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => coerce_number(field, n).map(Some),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse::<Decimal>().map(Some).map_err(|_| {
                EngineError::validation(field, format!("cannot parse '{}' as a number", trimmed))
            })
        }
        Some(other) => Err(EngineError::validation(
            field,
            format!("expected a number, got {}", type_name(other)),
        )),
    }
}

fn coerce_number(field: &str, n: &serde_json::Number) -> EngineResult<Decimal> {
    if let Some(i) = n.as_i64() {
        return Ok(Decimal::from(i));
    }
    n.as_f64()
        .and_then(Decimal::from_f64)
        .ok_or_else(|| EngineError::validation(field, format!("'{}' is out of numeric range", n)))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
