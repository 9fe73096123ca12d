use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use log::debug;
use time::{Date, OffsetDateTime};

use api::{ApiConfig, DateRange, FetchError, Report, ReportClient};

use crate::components::topbar::TopBar;
use crate::core::{format, platform};
use crate::report::{CardList, ReportExportButton, ReportState};

/// Events flowing through the fetch coroutine. Every request is stamped with
/// a sequence number; completions for anything but the latest are discarded,
/// so a slow response for an old range can never overwrite a newer one.
#[derive(Debug)]
enum ReportEvent {
    RangeChanged { range: DateRange },
    Resolved {
        seq: u64,
        outcome: Result<Report, FetchError>,
    },
}

#[component]
pub fn ReportView() -> Element {
    let config = try_use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_env);
    let client = use_hook(|| ReportClient::new(config));

    let today = use_hook(|| OffsetDateTime::now_utc().date());
    let from = use_signal(|| today);
    let to = use_signal(|| today);
    let state = use_signal(ReportState::default);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<ReportEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let client_ref = client.clone();
        let state_ref = state;

        use_coroutine(move |mut rx: UnboundedReceiver<ReportEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let client = client_ref.clone();
            let mut state_signal = state_ref;

            async move {
                let mut latest_seq = 0u64;
                while let Some(event) = rx.next().await {
                    match event {
                        ReportEvent::RangeChanged { range } => {
                            latest_seq += 1;
                            queue_fetch(sender_slot.clone(), client.clone(), range, latest_seq);
                        }
                        ReportEvent::Resolved { seq, outcome } => {
                            if seq != latest_seq {
                                debug!(
                                    "discarding stale report response (seq {seq}, latest {latest_seq})"
                                );
                                continue;
                            }
                            match outcome {
                                Ok(report) => state_signal.set(ReportState::loaded(report)),
                                Err(err) => {
                                    state_signal.set(ReportState::failed(err.to_string()))
                                }
                            }
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    // Fetch once on mount, and again whenever either bound changes.
    use_effect(move || {
        let range = DateRange::from_dates(from(), to());
        coroutine.send(ReportEvent::RangeChanged { range });
    });

    let snapshot = state();
    let range_label = format!("{} - {}", format::day_month(from()), format::day_month(to()));
    let today_iso = format::iso_date(today);

    rsx! {
        div { class: "report-page",
            div { class: "report-controls",
                {date_field("From", from, &today_iso)}
                {date_field("To", to, &today_iso)}
                ReportExportButton { state: snapshot.clone(), range_label }
            }

            div { class: "report-capture",
                TopBar { from: from(), to: to() }
                div { class: "report-body",
                    CardList { state: snapshot }
                }
            }
        }
    }
}

/// Date picker bound to one end of the range. Future dates are not
/// selectable, and re-entering the same date does not touch the signal, so
/// only real changes trigger a refetch.
fn date_field(label: &str, mut value: Signal<Date>, max: &str) -> Element {
    rsx! {
        label { class: "report-controls__field",
            span { class: "report-controls__label", "{label}" }
            input {
                r#type: "date",
                class: "report-controls__input",
                value: "{format::iso_date(value())}",
                max: "{max}",
                oninput: move |evt| {
                    if let Some(parsed) = format::parse_iso_date(&evt.value()) {
                        if parsed != value() {
                            value.set(parsed);
                        }
                    }
                },
            }
        }
    }
}

fn queue_fetch(
    sender_slot: Rc<RefCell<Option<UnboundedSender<ReportEvent>>>>,
    client: ReportClient,
    range: DateRange,
    seq: u64,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            let outcome = client.fetch_votes(&range).await;
            let _ = sender.unbounded_send(ReportEvent::Resolved { seq, outcome });
        });
    }
}
