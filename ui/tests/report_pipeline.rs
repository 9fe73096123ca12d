//! End-to-end check of the parse → card view-model pipeline: feeding the
//! fetcher's own parsed output through the card builders must reproduce every
//! proposal id, title, and mapped vote label, in backend order.

use api::Report;
use ui::report::{card_entries, ReportState};

const BODY: &str = r#"{
    "osmosis": [
        {"proposalID": "412", "title": "Lower taker fee", "vote_option": "VOTE_OPTION_NO"},
        {"proposalID": "413", "title": "Community pool spend", "vote_option": "VOTE_OPTION_YES"}
    ],
    "cosmoshub": [
        {"proposalID": "1", "title": "Upgrade", "vote_option": "VOTE_OPTION_YES"}
    ]
}"#;

#[test]
fn parsed_fetch_output_round_trips_through_cards() {
    let report = Report::parse(BODY).unwrap();
    let entries = card_entries(&report);

    let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Osmosis", "Cosmoshub"]);

    let osmosis = &entries[0];
    assert_eq!(osmosis.rows.len(), 2);
    assert_eq!(osmosis.rows[0].proposal_id, "412");
    assert_eq!(osmosis.rows[0].title, "Lower taker fee");
    assert_eq!(osmosis.rows[0].vote_label, "NO");
    assert_eq!(osmosis.rows[0].vote_color, "indianred");
    assert_eq!(osmosis.rows[1].vote_label, "YES");

    let hub = &entries[1];
    assert_eq!(hub.rows.len(), 1);
    assert_eq!(hub.rows[0].proposal_id, "1");
    assert_eq!(hub.rows[0].title, "Upgrade");
    assert_eq!(hub.rows[0].vote_label, "YES");
    assert_eq!(hub.rows[0].vote_color, "green");
}

#[test]
fn empty_fetch_output_lands_in_the_placeholder_branch() {
    let state = ReportState::loaded(Report::parse("{}").unwrap());
    assert!(state.is_blank());
    assert!(state.error.is_none());
}

#[test]
fn fetch_failure_replaces_a_previously_loaded_report() {
    let loaded = ReportState::loaded(Report::parse(BODY).unwrap());
    assert!(!loaded.is_blank());

    let failed = ReportState::failed("Network Error");
    assert!(failed.report.is_none());
    assert_eq!(failed.error.as_deref(), Some("Network Error"));
}

#[test]
fn malformed_entries_surface_as_skip_counts_not_blanks() {
    let report = Report::parse(
        r#"{"akash": [
            {"proposalID": "9", "title": "Fees", "vote_option": "VOTE_OPTION_ABSTAIN"},
            {"proposalID": "10"}
        ]}"#,
    )
    .unwrap();
    let entries = card_entries(&report);

    assert_eq!(entries[0].rows.len(), 1);
    assert_eq!(entries[0].skipped, 1);
    assert_eq!(entries[0].rows[0].vote_label, "ABSTAIN");
    assert_eq!(entries[0].rows[0].vote_color, "gray");
}
