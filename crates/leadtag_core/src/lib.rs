//! Lead tagging and audience filtering engine.
//! This crate is the single source of truth for tag classification rules.
//!
//! Raw lead records are converted into a small, bounded set of normalized
//! classification tags at import time (calendar period, geography,
//! property size); tag selections are later resolved into concrete
//! campaign audiences with per-tag population counts.

pub mod audience;
pub mod logging;
pub mod model;
pub mod tagging;

pub use audience::{count_leads_by_tag, extract_all_tags, filter_by_tags};
pub use logging::{init_logging, logging_status};
pub use model::lead::{LeadAddress, LeadRecord, PropertyInfo};
pub use model::options::{TaggingOptions, DEFAULT_TAG_SEPARATOR};
pub use model::tag::Tag;
pub use tagging::batch::tag_leads;
pub use tagging::generator::TagGenerator;
pub use tagging::geo::GeoNormalizer;
pub use tagging::geo_data::{GeoLookupTable, ReferenceDataError, ReferenceDataResult};
pub use tagging::property::{property_tag, AcreageBracket, ACREAGE_BRACKETS};
pub use tagging::time::time_tag;
pub use tagging::validate::{
    clean_tags, split_tag_list, validate_and_clean, CleanedTags, MAX_TAGS_PER_LEAD,
};

/// Returns the engine crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
