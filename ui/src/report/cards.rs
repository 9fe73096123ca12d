use dioxus::prelude::*;

use super::{card_entries, NetworkCard, ReportState};

/// Card grid for the fetched report. An error takes over the whole area; an
/// empty result renders the placeholder instead of zero cards.
#[component]
pub fn CardList(state: ReportState) -> Element {
    let entries = state.report.as_ref().map(card_entries).unwrap_or_default();

    rsx! {
        if let Some(message) = state.error {
            div { class: "report-error", "{message}" }
        } else if entries.is_empty() {
            p { class: "report-placeholder", "Nothing here" }
        } else {
            div { class: "report-masonry",
                for entry in entries.into_iter() {
                    NetworkCard { entry }
                }
            }
        }
    }
}
