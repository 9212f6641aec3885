//! Batch tagging across an import.
//!
//! # Responsibility
//! - Apply generation, merge with pre-existing tags, and validation across
//!   a whole lead collection.
//!
//! # Invariants
//! - Pure map: input records are consumed by value and returned as updated
//!   copies, in input order.
//! - Auto-generated tags precede pre-existing ones in the merge, so they
//!   win the cap.
//! - Deduplication is case-insensitive and keeps the first occurrence.
//! - A missing reference time is resolved once for the whole batch.

use crate::model::lead::LeadRecord;
use crate::model::options::TaggingOptions;
use crate::tagging::generator::TagGenerator;
use crate::tagging::validate::clean_tags;
use log::{debug, info};
use std::collections::HashSet;

/// Tags every lead in the batch and returns the updated copies.
///
/// Per lead: generate the enabled auto tags, append the lead's pre-existing
/// tags, dedupe case-insensitively keeping first occurrences, then clean
/// and cap the merged set.
pub fn tag_leads(
    generator: &TagGenerator,
    leads: Vec<LeadRecord>,
    options: &TaggingOptions,
) -> Vec<LeadRecord> {
    let options = options.pinned(options.resolve_reference());
    let total = leads.len();

    let tagged: Vec<LeadRecord> = leads
        .into_iter()
        .map(|lead| tag_one(generator, lead, &options))
        .collect();

    info!(
        "event=batch_tagged module=tagging status=ok leads={} dataset_version={}",
        total,
        generator.geo().dataset_version()
    );
    tagged
}

fn tag_one(generator: &TagGenerator, mut lead: LeadRecord, options: &TaggingOptions) -> LeadRecord {
    let auto = generator.generate(&lead, options);

    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<String> = Vec::with_capacity(auto.len() + lead.tags.len());
    for candidate in auto
        .into_iter()
        .map(|tag| tag.into_string())
        .chain(lead.tags.iter().cloned())
    {
        if seen.insert(candidate.trim().to_uppercase()) {
            merged.push(candidate);
        }
    }

    let cleaned = clean_tags(&merged);
    if cleaned.dropped > 0 {
        debug!(
            "event=tags_dropped module=tagging status=ok dropped={} kept={}",
            cleaned.dropped,
            cleaned.tags.len()
        );
    }

    lead.tags = cleaned.tags.into_iter().map(|tag| tag.into_string()).collect();
    lead
}

#[cfg(test)]
mod tests {
    use super::tag_leads;
    use crate::model::lead::LeadRecord;
    use crate::model::options::TaggingOptions;
    use crate::tagging::generator::TagGenerator;
    use chrono::{TimeZone, Utc};

    fn september_options() -> TaggingOptions {
        TaggingOptions {
            reference_time: Some(Utc.with_ymd_and_hms(2025, 9, 15, 0, 0, 0).unwrap()),
            ..TaggingOptions::default()
        }
    }

    #[test]
    fn auto_tags_come_first_and_win_the_cap() {
        let mut lead = LeadRecord::new(Some("Texas"), Some("Harris County"), Some(7.5));
        lead.tags = vec!["VIP".to_string(), "HOT".to_string()];

        let tagged = tag_leads(&TagGenerator::default(), vec![lead], &september_options());
        assert_eq!(tagged[0].tags, vec!["SEP25", "TX-HAR", "5-10AC"]);
    }

    #[test]
    fn pre_existing_tags_survive_when_auto_classes_are_sparse() {
        let mut lead = LeadRecord::new(Some("Texas"), None, None);
        lead.tags = vec!["vip".to_string(), "vip".to_string(), "Hot".to_string()];

        let tagged = tag_leads(&TagGenerator::default(), vec![lead], &september_options());
        // Duplicate "vip" collapses case-insensitively to its first
        // occurrence; normalization uppercases the survivors.
        assert_eq!(tagged[0].tags, vec!["SEP25", "TX", "VIP"]);
    }

    #[test]
    fn output_order_matches_input_order() {
        let first = LeadRecord::new(Some("Texas"), None, None);
        let second = LeadRecord::new(Some("Florida"), None, None);

        let tagged = tag_leads(
            &TagGenerator::default(),
            vec![first, second],
            &september_options(),
        );
        assert_eq!(tagged[0].tags, vec!["SEP25", "TX"]);
        assert_eq!(tagged[1].tags, vec!["SEP25", "FL"]);
    }

    #[test]
    fn retagging_is_idempotent() {
        let mut lead = LeadRecord::new(Some("Texas"), Some("Harris County"), Some(7.5));
        lead.tags = vec!["VIP".to_string()];
        let generator = TagGenerator::default();
        let options = september_options();

        let once = tag_leads(&generator, vec![lead], &options);
        let twice = tag_leads(&generator, once.clone(), &options);
        assert_eq!(once, twice);
    }

    #[test]
    fn unresolved_reference_time_is_shared_across_the_batch() {
        let leads = vec![LeadRecord::default(), LeadRecord::default()];
        let options = TaggingOptions::default();

        let tagged = tag_leads(&TagGenerator::default(), leads, &options);
        assert_eq!(tagged[0].tags, tagged[1].tags);
        assert_eq!(tagged[0].tags.len(), 1);
    }
}
