//! Per-lead tag generation orchestration.
//!
//! # Responsibility
//! - Run the three generators in fixed order (time, geography, property)
//!   and collect the enabled, non-absent tags.
//!
//! # Invariants
//! - Generation order is significant: it decides which tags survive the
//!   cap once pre-existing tags are merged in.
//! - Pure given a resolved reference time; no hidden state.

use crate::model::lead::LeadRecord;
use crate::model::options::TaggingOptions;
use crate::model::tag::Tag;
use crate::tagging::geo::GeoNormalizer;
use crate::tagging::property::property_tag;
use crate::tagging::time::time_tag;

/// Generates the auto-classification tags for one lead.
#[derive(Debug, Clone, Default)]
pub struct TagGenerator {
    geo: GeoNormalizer,
}

impl TagGenerator {
    /// Creates a generator over the given geo normalizer.
    pub fn new(geo: GeoNormalizer) -> Self {
        Self { geo }
    }

    /// Returns the geo normalizer in use.
    pub fn geo(&self) -> &GeoNormalizer {
        &self.geo
    }

    /// Derives the enabled tags for `lead` in fixed order: time,
    /// geography, property. Absent source data skips its tag class.
    pub fn generate(&self, lead: &LeadRecord, options: &TaggingOptions) -> Vec<Tag> {
        let mut tags = Vec::with_capacity(3);

        if options.include_time_tag {
            tags.push(time_tag(options.resolve_reference()));
        }
        if options.include_geographic_tag {
            if let Some(tag) = self.geo.geographic_tag(lead.state(), lead.county()) {
                tags.push(tag);
            }
        }
        if options.include_property_tag {
            if let Some(tag) = property_tag(lead.acreage()) {
                tags.push(tag);
            }
        }

        tags
    }
}
