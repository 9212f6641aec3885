//! Geographic tag derivation.
//!
//! # Responsibility
//! - Resolve free-text state/county strings to compact codes via the
//!   lookup tables, with a clearly separated best-effort fallback.
//!
//! # Invariants
//! - No state means no geographic tag; tagging is skipped, not failed.
//! - Every US locality with a state produces some candidate tag; fallback
//!   codes may collide between unlisted counties, which is tolerated.
//! - Fallback output that fails the tag format is discarded downstream by
//!   the validator, never patched up here.

use crate::model::tag::Tag;
use crate::tagging::geo_data::{normalize_county_key, GeoLookupTable};

/// Resolves free-text state/county input into geographic tags using an
/// injected reference dataset.
#[derive(Debug, Clone)]
pub struct GeoNormalizer {
    tables: GeoLookupTable,
}

impl Default for GeoNormalizer {
    fn default() -> Self {
        Self::new(GeoLookupTable::builtin().clone())
    }
}

impl GeoNormalizer {
    /// Creates a normalizer over the given reference dataset.
    pub fn new(tables: GeoLookupTable) -> Self {
        Self { tables }
    }

    /// Returns the version label of the dataset in use.
    pub fn dataset_version(&self) -> &str {
        self.tables.version()
    }

    /// Derives the geographic tag for a lead.
    ///
    /// Produces `STATE-COUNTY` when both parts resolve, `STATE` alone when
    /// the county is absent, and nothing at all without a state.
    pub fn geographic_tag(&self, state: Option<&str>, county: Option<&str>) -> Option<Tag> {
        let state_code = self.resolve_state_code(state?)?;

        let text = match county.and_then(|county| self.resolve_county_code(county)) {
            Some(county_code) => format!("{state_code}-{county_code}"),
            None => state_code,
        };
        Tag::parse(&text)
    }

    /// Table lookup by lowercased full name, then best-effort fallback.
    fn resolve_state_code(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Some(code) = self.tables.state_code(&trimmed.to_lowercase()) {
            return Some(code.to_string());
        }
        Some(fallback_state_code(trimmed))
    }

    /// Table lookup by normalized county key, then best-effort fallback.
    fn resolve_county_code(&self, raw: &str) -> Option<String> {
        let key = normalize_county_key(raw);
        if key.is_empty() {
            return None;
        }
        if let Some(code) = self.tables.county_code(&key) {
            return Some(code.to_string());
        }
        Some(fallback_county_code(&key))
    }
}

/// Best-effort state code for names missing from the table: the first two
/// characters, uppercased. Collisions with real USPS codes are accepted.
fn fallback_state_code(trimmed: &str) -> String {
    trimmed.chars().take(2).collect::<String>().to_uppercase()
}

/// Best-effort county code for names missing from the table: whitespace
/// removed, first three characters, uppercased. Unlisted counties sharing
/// a prefix collide; that is the documented trade-off.
fn fallback_county_code(normalized: &str) -> String {
    normalized
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .take(3)
        .collect::<String>()
        .to_uppercase()
}
