use chrono::{TimeZone, Utc};
use leadtag_core::{
    count_leads_by_tag, extract_all_tags, filter_by_tags, tag_leads, LeadRecord, TagGenerator,
    TaggingOptions,
};

fn tagged_sample() -> Vec<LeadRecord> {
    let options = TaggingOptions {
        reference_time: Some(Utc.with_ymd_and_hms(2025, 9, 15, 0, 0, 0).unwrap()),
        ..TaggingOptions::default()
    };
    let leads = vec![
        LeadRecord::new(Some("Texas"), Some("Harris County"), Some(7.5)),
        LeadRecord::new(Some("Florida"), Some("Miami-Dade"), Some(0.4)),
        LeadRecord::new(Some("Texas"), Some("Harris County"), None),
    ];
    tag_leads(&TagGenerator::default(), leads, &options)
}

#[test]
fn extracted_vocabulary_is_sorted_and_distinct() {
    let tags = extract_all_tags(&tagged_sample());
    assert_eq!(tags, vec!["0-1AC", "5-10AC", "FL-MIA", "SEP25", "TX-HAR"]);
}

#[test]
fn counts_reflect_per_tag_populations() {
    let counts = count_leads_by_tag(&tagged_sample());
    assert_eq!(counts.get("SEP25"), Some(&3));
    assert_eq!(counts.get("TX-HAR"), Some(&2));
    assert_eq!(counts.get("FL-MIA"), Some(&1));
    assert_eq!(counts.get("5-10AC"), Some(&1));
    assert_eq!(counts.get("0-1AC"), Some(&1));
}

#[test]
fn empty_selection_is_the_full_audience() {
    let leads = tagged_sample();
    let filtered = filter_by_tags(&leads, &[]);
    assert_eq!(filtered, leads);
}

#[test]
fn selection_is_a_union_not_an_intersection() {
    let leads = tagged_sample();
    let selected = vec!["TX-HAR".to_string(), "FL-MIA".to_string()];

    let filtered = filter_by_tags(&leads, &selected);
    // A lead carrying only TX-HAR is still part of the union audience.
    assert_eq!(filtered.len(), 3);
}

#[test]
fn selection_with_unknown_tag_matches_nothing_extra() {
    let leads = tagged_sample();
    let selected = vec!["NOPE".to_string()];
    assert!(filter_by_tags(&leads, &selected).is_empty());
}

#[test]
fn counts_and_filter_agree_on_population_sizes() {
    let leads = tagged_sample();
    let counts = count_leads_by_tag(&leads);
    for (tag, count) in counts {
        let filtered = filter_by_tags(&leads, &[tag]);
        assert_eq!(filtered.len(), count);
    }
}
