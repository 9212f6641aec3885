//! Tag set normalization, validation, and capping.
//!
//! # Responsibility
//! - Clean raw tag lists into the normalized vocabulary and enforce the
//!   per-lead cap.
//! - Split raw separator-joined tag cells coming out of imports.
//!
//! # Invariants
//! - A cleaned set holds at most [`MAX_TAGS_PER_LEAD`] entries, the first
//!   survivors in input order.
//! - Malformed and excess entries are dropped silently on the default
//!   surface; [`clean_tags`] additionally reports how many were dropped.

use crate::model::tag::Tag;

/// Hard cap on tags per lead. First three survivors win; this is the
/// documented contract, not a tunable.
pub const MAX_TAGS_PER_LEAD: usize = 3;

/// Outcome of cleaning one raw tag list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedTags {
    /// Surviving tags, at most [`MAX_TAGS_PER_LEAD`], in input order.
    pub tags: Vec<Tag>,
    /// Entries discarded as blank, malformed, or over the cap.
    pub dropped: usize,
}

/// Normalizes each entry (trim + uppercase), drops blank or malformed
/// ones, truncates to the first [`MAX_TAGS_PER_LEAD`] survivors, and
/// reports the drop count.
pub fn clean_tags(raw: &[String]) -> CleanedTags {
    let mut tags = Vec::with_capacity(MAX_TAGS_PER_LEAD);
    let mut dropped = 0usize;

    for entry in raw {
        match Tag::parse(entry) {
            Some(tag) if tags.len() < MAX_TAGS_PER_LEAD => tags.push(tag),
            _ => dropped += 1,
        }
    }

    CleanedTags { tags, dropped }
}

/// Default cleaning surface: survivors only, drops unreported.
pub fn validate_and_clean(raw: &[String]) -> Vec<Tag> {
    clean_tags(raw).tags
}

/// Splits a raw separator-joined tag cell into candidate entries,
/// discarding blanks. Entries are not validated here; run the result
/// through [`clean_tags`].
pub fn split_tag_list(raw: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        let trimmed = raw.trim();
        return if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        };
    }

    raw.split(separator)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{clean_tags, split_tag_list, validate_and_clean, MAX_TAGS_PER_LEAD};

    fn owned(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|entry| entry.to_string()).collect()
    }

    fn texts(tags: Vec<crate::model::tag::Tag>) -> Vec<String> {
        tags.into_iter().map(|tag| tag.into_string()).collect()
    }

    #[test]
    fn caps_at_first_three_valid_entries_in_input_order() {
        let raw = owned(&["SEP25", "TX-HAR", "5-10AC", "VIP", "HOT"]);
        let cleaned = clean_tags(&raw);
        assert_eq!(cleaned.tags.len(), MAX_TAGS_PER_LEAD);
        assert_eq!(texts(cleaned.tags), vec!["SEP25", "TX-HAR", "5-10AC"]);
        assert_eq!(cleaned.dropped, 2);
    }

    #[test]
    fn normalizes_case_and_surrounding_whitespace() {
        let raw = owned(&["  sep25 ", "tx-har"]);
        assert_eq!(texts(validate_and_clean(&raw)), vec!["SEP25", "TX-HAR"]);
    }

    #[test]
    fn drops_blank_and_malformed_entries_without_consuming_cap_slots() {
        let raw = owned(&["", "  ", "BAD TAG", "P@ID", "SEP25", "TX-HAR", "5-10AC"]);
        let cleaned = clean_tags(&raw);
        assert_eq!(texts(cleaned.tags), vec!["SEP25", "TX-HAR", "5-10AC"]);
        assert_eq!(cleaned.dropped, 4);
    }

    #[test]
    fn split_honors_custom_separator_and_discards_blanks() {
        assert_eq!(
            split_tag_list("vip; hot ;; ", ";"),
            owned(&["vip", "hot"])
        );
        assert_eq!(split_tag_list("a,b", ","), owned(&["a", "b"]));
        assert_eq!(split_tag_list("solo", ","), owned(&["solo"]));
    }

    #[test]
    fn split_with_empty_separator_returns_whole_trimmed_cell() {
        assert_eq!(split_tag_list("  vip  ", ""), owned(&["vip"]));
        assert!(split_tag_list("   ", "").is_empty());
    }
}
