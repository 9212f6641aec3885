//! Tagging configuration.
//!
//! # Responsibility
//! - Select which tag classes are generated and carry the injectable
//!   reference timestamp used by the time tagger.
//!
//! # Invariants
//! - When `reference_time` is set, the engine never consults the wall
//!   clock; identical inputs produce identical tags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default separator for raw tag-list cells coming out of CSV imports.
pub const DEFAULT_TAG_SEPARATOR: &str = ",";

/// Configuration for one tagging run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggingOptions {
    /// Emit the calendar-period tag (`MMMYY`).
    pub include_time_tag: bool,
    /// Emit the geographic tag (`STATE` or `STATE-COUNTY`).
    pub include_geographic_tag: bool,
    /// Emit the acreage-bracket tag (e.g. `5-10AC`).
    pub include_property_tag: bool,
    /// Timestamp the time tag is derived from. `None` means "now",
    /// resolved once per batch; import pipelines should inject the upload
    /// timestamp for determinism.
    pub reference_time: Option<DateTime<Utc>>,
    /// Separator used when splitting raw tag-list cells.
    pub tag_separator: String,
}

impl Default for TaggingOptions {
    fn default() -> Self {
        Self {
            include_time_tag: true,
            include_geographic_tag: true,
            include_property_tag: true,
            reference_time: None,
            tag_separator: DEFAULT_TAG_SEPARATOR.to_string(),
        }
    }
}

impl TaggingOptions {
    /// Returns the effective reference timestamp, consulting the wall
    /// clock only when none was injected.
    pub fn resolve_reference(&self) -> DateTime<Utc> {
        self.reference_time.unwrap_or_else(Utc::now)
    }

    /// Returns a copy with the reference timestamp pinned, so one batch
    /// shares a single time tag end to end.
    pub fn pinned(&self, reference: DateTime<Utc>) -> Self {
        Self {
            reference_time: Some(reference),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TaggingOptions;
    use chrono::{TimeZone, Utc};

    #[test]
    fn defaults_enable_all_tag_classes() {
        let options = TaggingOptions::default();
        assert!(options.include_time_tag);
        assert!(options.include_geographic_tag);
        assert!(options.include_property_tag);
        assert_eq!(options.reference_time, None);
        assert_eq!(options.tag_separator, ",");
    }

    #[test]
    fn resolve_reference_returns_injected_timestamp_unchanged() {
        let injected = Utc.with_ymd_and_hms(2025, 9, 15, 12, 0, 0).unwrap();
        let options = TaggingOptions {
            reference_time: Some(injected),
            ..TaggingOptions::default()
        };
        assert_eq!(options.resolve_reference(), injected);
    }

    #[test]
    fn pinned_copies_toggles_and_sets_reference() {
        let reference = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
        let options = TaggingOptions {
            include_property_tag: false,
            ..TaggingOptions::default()
        };
        let pinned = options.pinned(reference);
        assert_eq!(pinned.reference_time, Some(reference));
        assert!(!pinned.include_property_tag);
    }
}
