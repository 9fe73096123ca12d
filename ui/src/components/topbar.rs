//! Brand strip across the top of the captured report area.

use dioxus::prelude::*;
use time::Date;

use crate::core::format;

#[component]
pub fn TopBar(from: Date, to: Date) -> Element {
    let range = format!("{} - {}", format::day_month(from), format::day_month(to));

    rsx! {
        header { class: "topbar",
            span { class: "topbar__mark", aria_hidden: "true", "G" }
            h1 { class: "topbar__title", "Govscope Governance Report" }
            span { class: "topbar__divider", "|" }
            span { class: "topbar__range", "{range}" }
        }
    }
}
