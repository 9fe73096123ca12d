//! Wire and domain types for the governance voting report.

use serde::Deserialize;
use time::Date;

/// Unix-second bounds for a report query. Both ends are inclusive and are
/// passed verbatim to the backend; `from <= to` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: i64,
    pub to: i64,
}

impl DateRange {
    /// Build a range from two calendar dates, floored to midnight UTC.
    pub fn from_dates(from: Date, to: Date) -> Self {
        Self {
            from: unix_floor(from),
            to: unix_floor(to),
        }
    }
}

fn unix_floor(date: Date) -> i64 {
    date.midnight().assume_utc().unix_timestamp()
}

/// Vote option as emitted by the gov module, with a catch-all for codes we
/// don't recognize yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOption {
    Yes,
    No,
    Abstain,
    NoWithVeto,
    Other(String),
}

impl VoteOption {
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "VOTE_OPTION_YES" => Self::Yes,
            "VOTE_OPTION_NO" => Self::No,
            "VOTE_OPTION_ABSTAIN" => Self::Abstain,
            "VOTE_OPTION_NO_WITH_VETO" => Self::NoWithVeto,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A single validated vote. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteRecord {
    pub proposal_id: String,
    pub title: String,
    pub vote_option: VoteOption,
}

/// Wire shape of one vote entry. Every field is optional so a malformed
/// entry degrades into a [`RecordIssue`] instead of sinking the whole body.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVoteRecord {
    #[serde(rename = "proposalID")]
    pub proposal_id: Option<String>,
    pub title: Option<String>,
    pub vote_option: Option<String>,
}

impl RawVoteRecord {
    pub fn validate(self, index: usize) -> Result<VoteRecord, RecordIssue> {
        let Some(proposal_id) = self.proposal_id else {
            return Err(RecordIssue::missing(index, "proposalID"));
        };
        let Some(title) = self.title else {
            return Err(RecordIssue::missing(index, "title"));
        };
        let Some(vote_option) = self.vote_option else {
            return Err(RecordIssue::missing(index, "vote_option"));
        };

        Ok(VoteRecord {
            proposal_id,
            title,
            vote_option: VoteOption::from_wire(&vote_option),
        })
    }
}

/// A rejected wire entry: which position it held and which field was absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIssue {
    pub index: usize,
    pub missing: &'static str,
}

impl RecordIssue {
    fn missing(index: usize, field: &'static str) -> Self {
        Self {
            index,
            missing: field,
        }
    }
}

/// One network's slice of the report. Vote order is whatever the backend
/// returned; no sort is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkVotes {
    pub network: String,
    pub votes: Vec<VoteRecord>,
    pub skipped: Vec<RecordIssue>,
}

/// The full report: networks in the order the backend emitted its keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub networks: Vec<NetworkVotes>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    pub fn total_votes(&self) -> usize {
        self.networks.iter().map(|n| n.votes.len()).sum()
    }

    /// Parse a backend body. Network key order is preserved (serde_json is
    /// built with `preserve_order`), and entries missing a required field
    /// are downgraded to per-record issues rather than rendered blank.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(body)?;

        let mut networks = Vec::with_capacity(map.len());
        for (name, value) in map {
            let raw: Vec<RawVoteRecord> = serde_json::from_value(value)?;

            let mut votes = Vec::with_capacity(raw.len());
            let mut skipped = Vec::new();
            for (index, entry) in raw.into_iter().enumerate() {
                match entry.validate(index) {
                    Ok(record) => votes.push(record),
                    Err(issue) => skipped.push(issue),
                }
            }

            networks.push(NetworkVotes {
                network: name,
                votes,
                skipped,
            });
        }

        Ok(Self { networks })
    }
}
