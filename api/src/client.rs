//! HTTP client for the votes backend.

use log::debug;
use thiserror::Error;

use crate::types::{DateRange, Report};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Where the votes backend lives. Handed to [`ReportClient::new`] explicitly
/// rather than read from ambient process state at call sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Resolve the base URI from `GOVSCOPE_API_URI`. The wasm build bakes the
    /// value in at compile time; native builds read the process environment.
    pub fn from_env() -> Self {
        #[cfg(target_arch = "wasm32")]
        let configured = option_env!("GOVSCOPE_API_URI").map(str::to_string);

        #[cfg(not(target_arch = "wasm32"))]
        let configured = std::env::var("GOVSCOPE_API_URI").ok();

        Self::new(configured.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Why a fetch failed. The view collapses all of these into one display
/// message, but the boundary stays typed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed report body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default)]
pub struct ReportClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ReportClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn votes_url(&self, range: &DateRange) -> String {
        format!(
            "{}/votes?start={}&end={}",
            self.config.base_url, range.from, range.to
        )
    }

    /// One GET per call; no retry and no timeout beyond the client defaults.
    /// Staleness across overlapping calls is the caller's concern.
    pub async fn fetch_votes(&self, range: &DateRange) -> Result<Report, FetchError> {
        let url = self.votes_url(range);
        debug!("fetching votes: {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let report = Report::parse(&body)?;
        debug!("report received: {} networks", report.networks.len());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn votes_url_carries_both_bounds() {
        let client = ReportClient::new(ApiConfig::new("http://example.test"));
        let range = DateRange {
            from: 1_696_118_400,
            to: 1_696_204_800,
        };
        assert_eq!(
            client.votes_url(&range),
            "http://example.test/votes?start=1696118400&end=1696204800"
        );
    }

    #[test]
    fn votes_url_floors_picked_dates() {
        let client = ReportClient::new(ApiConfig::default());
        let range = DateRange::from_dates(date!(1970 - 01 - 02), date!(1970 - 01 - 02));
        assert_eq!(
            client.votes_url(&range),
            "http://127.0.0.1:8080/votes?start=86400&end=86400"
        );
    }

    #[test]
    fn config_trims_trailing_slashes() {
        let config = ApiConfig::new("https://gov.example.io///");
        assert_eq!(config.base_url, "https://gov.example.io");
    }
}
