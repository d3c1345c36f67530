//! Shared types and models for the Roofing Quote Platform
//!
//! This crate contains types shared between the quote engine, the API
//! surface, and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
