//! Normalized segmentation tag vocabulary.
//!
//! # Responsibility
//! - Define the `Tag` newtype and its normalization/format contract.
//!
//! # Invariants
//! - A `Tag` always matches `^[A-Z0-9\-+]+$`; it cannot be constructed in
//!   any other shape.
//! - Parsing is fail-soft: malformed input yields `None`, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

static TAG_FORMAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9\-+]+$").expect("valid tag format regex"));

/// Short, uppercase, format-constrained string attached to a lead for
/// segmentation, e.g. `SEP25`, `TX-HAR`, `5-10AC`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Normalizes raw input (trim + uppercase) and accepts it only when the
    /// result matches the tag format.
    ///
    /// Returns `None` for blank or malformed input; there is no error
    /// channel by design.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() || !TAG_FORMAT_RE.is_match(&normalized) {
            return None;
        }
        Some(Self(normalized))
    }

    /// Returns the tag text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the tag, returning the owned string for storage.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns whether already-normalized text satisfies the tag format.
pub(crate) fn is_valid_tag_text(value: &str) -> bool {
    TAG_FORMAT_RE.is_match(value)
}
