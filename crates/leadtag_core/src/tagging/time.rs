//! Calendar-period tag derivation.
//!
//! # Responsibility
//! - Map a timestamp to its `MMMYY` import-period tag.
//!
//! # Invariants
//! - Total for any valid timestamp; there is no failure mode.
//! - The 2-digit year wraps every 100 years. That is the agreed tag
//!   format, not something to fix here.

use crate::model::tag::Tag;
use chrono::{DateTime, Datelike, Utc};

/// Uppercase English month abbreviations, indexed by `month0`.
const MONTH_ABBREV: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Derives the `MMMYY` tag for the given timestamp, e.g. 2025-09-15 ->
/// `SEP25`.
pub fn time_tag(reference: DateTime<Utc>) -> Tag {
    let month = MONTH_ABBREV[reference.month0() as usize];
    let year = reference.year().rem_euclid(100);
    Tag::parse(&format!("{month}{year:02}")).expect("MMMYY text always satisfies the tag format")
}
