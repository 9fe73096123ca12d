use dioxus::prelude::*;

use super::{skipped_note, CardEntry, RowEntry};

/// One network's votes as an outlined card: badge + capitalized name in the
/// header, one row per vote underneath.
#[component]
pub fn NetworkCard(entry: CardEntry) -> Element {
    let note = skipped_note(entry.skipped);

    rsx! {
        section { class: "report-card",
            header { class: "report-card__header",
                if let Some(badge) = entry.badge {
                    span {
                        class: "report-card__badge",
                        style: "background:{badge.color}",
                        aria_hidden: "true",
                        "{badge.initial}"
                    }
                }
                h2 { class: "report-card__title", "{entry.title}" }
            }

            div { class: "report-card__body",
                for row in entry.rows.into_iter() {
                    VoteRow { row }
                }
            }

            if let Some(note) = note {
                p { class: "report-card__skipped", "{note}" }
            }
        }
    }
}

#[component]
fn VoteRow(row: RowEntry) -> Element {
    rsx! {
        div { class: "report-row",
            span { class: "report-row__id", "#{row.proposal_id}" }
            span { class: "report-row__title", "{row.title}" }
            span {
                class: "report-row__vote",
                style: "color:{row.vote_color}",
                "{row.vote_label}"
            }
        }
    }
}
