//! Tag generation pipeline.
//!
//! # Responsibility
//! - Derive the three tag classes (time, geography, property size) from a
//!   lead record.
//! - Normalize, deduplicate, and cap tag sets; apply the pipeline across
//!   whole import batches.
//!
//! # Invariants
//! - Generation is fail-soft: missing or invalid source data skips a tag
//!   class instead of erroring.
//! - Generators are pure once a reference timestamp is resolved.

pub mod batch;
pub mod generator;
pub mod geo;
pub mod geo_data;
pub mod property;
pub mod time;
pub mod validate;
