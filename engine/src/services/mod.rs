//! Engine services

pub mod batch;
pub mod normalize;
pub mod pricing;
pub mod region;
