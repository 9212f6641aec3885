//! Lead record shape consumed by the tagging engine.
//!
//! # Responsibility
//! - Model the fields the engine actually reads: address state/county,
//!   property acreage, and the opaque tag list.
//! - Carry every other lead field untouched through a flattened bag, so
//!   the engine's contract stays narrow while batch tagging can still
//!   round-trip full records.
//!
//! # Invariants
//! - `tags` is an ordered list; the engine guarantees case-insensitive
//!   uniqueness only for records it has produced itself.
//! - The passthrough bag is never inspected or modified by the engine.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Address fields relevant to geographic tagging.
///
/// Street-level fields ride in the lead's passthrough bag; the engine only
/// resolves state and county.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadAddress {
    /// Free-text state name or abbreviation, e.g. `"Texas"` or `"TX"`.
    pub state: Option<String>,
    /// Free-text county name, with or without a "County"/"Parish" suffix.
    pub county: Option<String>,
}

/// Property fields relevant to size-bracket tagging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyInfo {
    /// Parcel size in acres. Non-positive and NaN values are treated as
    /// absent by the bucketizer.
    pub acreage: Option<f64>,
}

/// Identity-agnostic lead record.
///
/// The external lead store owns identity, persistence, and the full field
/// schema. The engine receives records by value and returns updated copies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    /// Address projection used by geographic tagging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<LeadAddress>,
    /// Property projection used by size-bracket tagging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<PropertyInfo>,
    /// Opaque segmentation tags, stored externally as a string array.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Every lead field this engine does not consume (names, phones,
    /// scores...). Serialized flat so external records round-trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LeadRecord {
    /// Convenience constructor for the fields the engine reads.
    pub fn new(state: Option<&str>, county: Option<&str>, acreage: Option<f64>) -> Self {
        Self {
            address: Some(LeadAddress {
                state: state.map(str::to_string),
                county: county.map(str::to_string),
            }),
            property: Some(PropertyInfo { acreage }),
            tags: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Returns the address state, if any.
    pub fn state(&self) -> Option<&str> {
        self.address.as_ref()?.state.as_deref()
    }

    /// Returns the address county, if any.
    pub fn county(&self) -> Option<&str> {
        self.address.as_ref()?.county.as_deref()
    }

    /// Returns the property acreage, if any.
    pub fn acreage(&self) -> Option<f64> {
        self.property.as_ref()?.acreage
    }

    /// Returns whether this lead carries `tag`, compared case-insensitively.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::LeadRecord;
    use serde_json::json;

    #[test]
    fn unknown_fields_round_trip_through_passthrough_bag() {
        let raw = json!({
            "owner_name": "Jane Seller",
            "phone1": "+15550001111",
            "address": { "state": "Texas", "county": "Harris County" },
            "property": { "acreage": 7.5 },
            "tags": ["VIP"]
        });

        let lead: LeadRecord = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(lead.state(), Some("Texas"));
        assert_eq!(lead.acreage(), Some(7.5));
        assert_eq!(lead.extra.get("owner_name"), Some(&json!("Jane Seller")));

        let back = serde_json::to_value(&lead).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn has_tag_ignores_case() {
        let mut lead = LeadRecord::default();
        lead.tags.push("TX-HAR".to_string());
        assert!(lead.has_tag("tx-har"));
        assert!(!lead.has_tag("FL-MIA"));
    }

    #[test]
    fn accessors_tolerate_missing_projections() {
        let lead = LeadRecord::default();
        assert_eq!(lead.state(), None);
        assert_eq!(lead.county(), None);
        assert_eq!(lead.acreage(), None);
    }
}
