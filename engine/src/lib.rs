//! Quote calculation engine for the Roofing Quote Platform
//!
//! The engine is the pure, deterministic transformation from a pricing
//! profile and a property record to an itemized cost breakdown with a
//! bounded quote range, plus a batch driver that applies it across a
//! record set with per-record error isolation.
//!
//! Ingestion of uploaded files, persistence, and document rendering are
//! external collaborators; the engine never performs I/O.

pub mod error;
pub mod services;

pub use error::{EngineError, EngineResult};
pub use services::batch::{check_profile, run_batch, BatchError, BatchOutcome};
pub use services::normalize::normalize;
pub use services::pricing::{calculate_quote, crew_size_for};
pub use services::region::resolve_region_multiplier;
