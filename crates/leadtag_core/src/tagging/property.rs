//! Acreage-bracket tag derivation.
//!
//! # Responsibility
//! - Map parcel acreage into one of seven fixed size brackets.
//!
//! # Invariants
//! - Brackets are half-open `[lower, upper)` in ascending order; an exact
//!   boundary value belongs to the upper bracket.
//! - Missing, NaN, zero, or negative acreage yields no tag.

use crate::model::tag::Tag;

/// One half-open acreage interval bound to its canonical tag text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcreageBracket {
    /// Inclusive lower bound in acres.
    pub lower: f64,
    /// Exclusive upper bound; `None` for the open-ended top bracket.
    pub upper: Option<f64>,
    /// Canonical tag text.
    pub label: &'static str,
}

/// Size brackets in ascending order.
pub const ACREAGE_BRACKETS: [AcreageBracket; 7] = [
    AcreageBracket { lower: 0.0, upper: Some(1.0), label: "0-1AC" },
    AcreageBracket { lower: 1.0, upper: Some(5.0), label: "1-5AC" },
    AcreageBracket { lower: 5.0, upper: Some(10.0), label: "5-10AC" },
    AcreageBracket { lower: 10.0, upper: Some(25.0), label: "10-25AC" },
    AcreageBracket { lower: 25.0, upper: Some(50.0), label: "25-50AC" },
    AcreageBracket { lower: 50.0, upper: Some(100.0), label: "50-100AC" },
    AcreageBracket { lower: 100.0, upper: None, label: "100+AC" },
];

/// Derives the size-bracket tag for the given acreage.
pub fn property_tag(acreage: Option<f64>) -> Option<Tag> {
    let acres = acreage?;
    if !acres.is_finite() || acres <= 0.0 {
        return None;
    }

    let bracket = ACREAGE_BRACKETS
        .iter()
        .find(|bracket| acres >= bracket.lower && bracket.upper.is_none_or(|upper| acres < upper))?;
    Tag::parse(bracket.label)
}
