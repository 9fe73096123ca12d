//! Client crate for the Govscope votes backend. The data model and the HTTP
//! fetcher live here so both the web and desktop shells share one boundary.

pub mod client;
pub mod types;

pub use client::{ApiConfig, FetchError, ReportClient};
pub use types::{DateRange, NetworkVotes, RecordIssue, Report, VoteOption, VoteRecord};
