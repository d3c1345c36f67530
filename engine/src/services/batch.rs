//! Batch quote processing with per-record error isolation
//!
//! Records are processed in input order and results preserve that order;
//! the processor never deduplicates, sorts, or re-ranks. One bad row never
//! aborts the batch.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::services::normalize::normalize;
use crate::services::pricing::calculate_quote;
use shared::{validate_pricing_profile, PricingProfile, QuoteResult, RawRecord};

/// A record that failed during batch processing
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BatchError {
    /// Index of the failed record in the input sequence
    pub record_index: usize,
    pub reason: String,
}

/// Outcome of a batch run: successes and failures, both in input order
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatchOutcome {
    pub results: Vec<QuoteResult>,
    pub errors: Vec<BatchError>,
}

/// Check profile invariants before the engine accepts a profile.
///
/// Raised eagerly, never mid-batch: a bad profile means the batch could
/// not start, as opposed to individual records failing.
pub fn check_profile(profile: &PricingProfile) -> EngineResult<()> {
    validate_pricing_profile(profile)
        .map_err(|reason| EngineError::Configuration(reason.to_string()))
}

/// Apply the quote calculation across a record set.
///
/// Fails fast on a configuration error before any record is processed.
/// Per-record failures (uncoercible fields, missing address) are converted
/// into `errors` entries carrying the originating index, and processing
/// continues with the next record.
pub fn run_batch(profile: &PricingProfile, records: &[RawRecord]) -> EngineResult<BatchOutcome> {
    check_profile(profile)?;

    let mut results = Vec::with_capacity(records.len());
    let mut errors = Vec::new();

    for (record_index, raw) in records.iter().enumerate() {
        match normalize(raw).map(|record| calculate_quote(profile, &record)) {
            Ok(quote) => results.push(quote),
            Err(err) => {
                warn!(record_index, error = %err, "skipping record");
                errors.push(BatchError {
                    record_index,
                    reason: err.to_string(),
                });
            }
        }
    }

    debug!(
        total = records.len(),
        succeeded = results.len(),
        failed = errors.len(),
        "batch complete"
    );

    Ok(BatchOutcome { results, errors })
}
