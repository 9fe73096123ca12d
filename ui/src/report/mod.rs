mod card;
pub use card::NetworkCard;

mod cards;
pub use cards::CardList;

mod export;
pub use export::ReportExportButton;

pub mod snapshot;

use api::{NetworkVotes, Report};

use crate::core::{format, icons, vote};

/// Latest fetch outcome for the report view. Replaced wholesale on every
/// completion: a failure clears prior data, a success clears any error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportState {
    pub report: Option<Report>,
    pub error: Option<String>,
}

impl ReportState {
    pub fn loaded(report: Report) -> Self {
        Self {
            report: Some(report),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            report: None,
            error: Some(message.into()),
        }
    }

    /// True when there is nothing to show and no failure to explain.
    pub fn is_blank(&self) -> bool {
        self.error.is_none()
            && self
                .report
                .as_ref()
                .map(|report| report.is_empty())
                .unwrap_or(true)
    }
}

/// Everything a card needs, computed away from the rsx! tree so the render
/// policy stays unit-testable.
#[derive(Debug, Clone, PartialEq)]
pub struct CardEntry {
    pub network: String,
    pub title: String,
    pub badge: Option<Badge>,
    pub rows: Vec<RowEntry>,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub initial: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowEntry {
    pub proposal_id: String,
    pub title: String,
    pub vote_label: &'static str,
    pub vote_color: &'static str,
}

pub fn card_entries(report: &Report) -> Vec<CardEntry> {
    report.networks.iter().map(card_entry).collect()
}

fn card_entry(network: &NetworkVotes) -> CardEntry {
    let badge = icons::badge_color(&network.network).map(|color| Badge {
        initial: icons::badge_initial(&network.network),
        color,
    });

    let rows = network
        .votes
        .iter()
        .map(|record| RowEntry {
            proposal_id: record.proposal_id.clone(),
            title: record.title.clone(),
            vote_label: vote::label(&record.vote_option),
            vote_color: vote::color(&record.vote_option),
        })
        .collect();

    CardEntry {
        network: network.network.clone(),
        title: format::capitalize(&network.network),
        badge,
        rows,
        skipped: network.skipped.len(),
    }
}

pub(crate) fn skipped_note(skipped: usize) -> Option<String> {
    match skipped {
        0 => None,
        1 => Some("1 malformed entry skipped".to_string()),
        n => Some(format!("{n} malformed entries skipped")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        Report::parse(
            r#"{"cosmoshub":[{"proposalID":"1","title":"Upgrade","vote_option":"VOTE_OPTION_YES"}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn entries_capitalize_and_map_votes() {
        let entries = card_entries(&sample_report());

        assert_eq!(entries.len(), 1);
        let card = &entries[0];
        assert_eq!(card.title, "Cosmoshub");
        assert!(card.badge.is_some());
        assert_eq!(card.rows.len(), 1);

        let row = &card.rows[0];
        assert_eq!(row.proposal_id, "1");
        assert_eq!(row.title, "Upgrade");
        assert_eq!(row.vote_label, "YES");
        assert_eq!(row.vote_color, "green");
    }

    #[test]
    fn unknown_networks_get_no_badge() {
        let report =
            Report::parse(r#"{"testnet-7":[]}"#).unwrap();
        let entries = card_entries(&report);
        assert!(entries[0].badge.is_none());
    }

    #[test]
    fn blank_state_requires_no_error_and_no_data() {
        assert!(ReportState::default().is_blank());
        assert!(ReportState::loaded(Report::default()).is_blank());
        assert!(!ReportState::failed("Network Error").is_blank());
        assert!(!ReportState::loaded(sample_report()).is_blank());
    }

    #[test]
    fn failure_clears_previous_report() {
        let loaded = ReportState::loaded(sample_report());
        assert!(loaded.report.is_some());

        let failed = ReportState::failed("Network Error");
        assert!(failed.report.is_none());
        assert_eq!(failed.error.as_deref(), Some("Network Error"));
    }

    #[test]
    fn skipped_note_pluralizes() {
        assert_eq!(skipped_note(0), None);
        assert_eq!(skipped_note(1).unwrap(), "1 malformed entry skipped");
        assert_eq!(skipped_note(3).unwrap(), "3 malformed entries skipped");
    }
}
