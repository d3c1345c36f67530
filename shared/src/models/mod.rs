//! Domain models for the Roofing Quote Platform

mod profile;
mod quote;
mod record;

pub use profile::*;
pub use quote::*;
pub use record::*;
