//! Audience queries over tagged lead collections.
//!
//! # Responsibility
//! - Derive the distinct tag vocabulary, per-tag population counts, and
//!   tag-based lead selection used by campaign targeting.
//!
//! # Invariants
//! - Queries are pure read-only scans; nothing is cached between calls.
//! - Tag comparison is case-insensitive everywhere.
//! - An empty selection means "no filter": the full audience is returned
//!   unchanged, never an empty result.

use crate::model::lead::LeadRecord;
use std::collections::{BTreeMap, BTreeSet};

/// Returns the union of all tags across `leads`, uppercased and sorted
/// for stable rendering.
pub fn extract_all_tags(leads: &[LeadRecord]) -> Vec<String> {
    let mut distinct = BTreeSet::new();
    for lead in leads {
        for tag in &lead.tags {
            distinct.insert(tag.trim().to_uppercase());
        }
    }
    distinct.into_iter().collect()
}

/// Counts how many leads carry each tag. A lead with N tags contributes
/// to N counters.
pub fn count_leads_by_tag(leads: &[LeadRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for lead in leads {
        for tag in &lead.tags {
            *counts.entry(tag.trim().to_uppercase()).or_insert(0) += 1;
        }
    }
    counts
}

/// Selects the leads carrying at least one of the `selected` tags
/// (logical OR, case-insensitive).
///
/// An empty selection is the no-filter case and returns every lead
/// unchanged; campaign UIs rely on "nothing selected = full audience".
pub fn filter_by_tags(leads: &[LeadRecord], selected: &[String]) -> Vec<LeadRecord> {
    if selected.is_empty() {
        return leads.to_vec();
    }

    leads
        .iter()
        .filter(|lead| selected.iter().any(|wanted| lead.has_tag(wanted)))
        .cloned()
        .collect()
}
