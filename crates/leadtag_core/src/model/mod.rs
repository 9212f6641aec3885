//! Domain model for the lead tagging engine.
//!
//! # Responsibility
//! - Define the narrow lead shape the engine consumes (state, county,
//!   acreage, tags) plus an opaque passthrough bag for everything else.
//! - Define the normalized `Tag` vocabulary and tagging configuration.
//!
//! # Invariants
//! - Lead records are owned externally; the engine returns updated copies
//!   and never mutates in place.
//! - `Tag` values exist only in normalized, format-checked form.

pub mod lead;
pub mod options;
pub mod tag;
