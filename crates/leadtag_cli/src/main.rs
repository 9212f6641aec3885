//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `leadtag_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::{TimeZone, Utc};
use leadtag_core::{tag_leads, LeadRecord, TagGenerator, TaggingOptions};

fn main() {
    println!("leadtag_core version={}", leadtag_core::core_version());

    let options = TaggingOptions {
        reference_time: Some(Utc.with_ymd_and_hms(2025, 9, 15, 0, 0, 0).unwrap()),
        ..TaggingOptions::default()
    };
    let sample = LeadRecord::new(Some("Texas"), Some("Harris County"), Some(7.5));
    let tagged = tag_leads(&TagGenerator::default(), vec![sample], &options);
    println!("sample_tags={}", tagged[0].tags.join(","));
}
