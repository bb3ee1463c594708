//! Search-and-submit tracker page.
//!
//! The alternate variant: type a card name and submit it, instead of
//! clicking a grid. Shares the deck session with the grid variant.

use cyclesight_core::SortKey;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CycleBoard, SearchPicker};
use crate::context::use_session;

/// Tracker view with free-text selection.
#[component]
pub fn Search() -> Element {
    let mut session = use_session();
    let mut query = use_signal(String::new);

    let (held, upcoming, champion, champion_alive, complete, suggestions) = {
        let s = session.read();
        (
            s.held().to_vec(),
            s.upcoming(),
            s.champion().cloned(),
            s.champion_alive(),
            s.deck_complete(),
            s.available(&query.read(), SortKey::Name, true),
        )
    };

    // Handler for submitting a card name
    let submit = move |name: String| {
        match session.write().pick_exact(&name) {
            Ok(()) => query.set(String::new()),
            Err(e) => tracing::warn!("search pick rejected: {}", e),
        }
    };

    let rotate = move |index: usize| {
        if let Err(e) = session.write().rotate_held(index) {
            tracing::warn!("rotation rejected: {}", e);
        }
    };

    let champion_death = move |_| {
        if let Err(e) = session.write().resolve_champion_death() {
            tracing::warn!("champion death rejected: {}", e);
        }
    };

    let reset = move |_| {
        session.write().reset();
        query.set(String::new());
    };

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                h1 { class: "page-title", "Cyclesight" }
                nav { class: "variant-nav",
                    Link { class: "variant-link", to: Route::Picker {}, "grid mode" }
                }
            }

            div { class: "tracker-content",
                if !complete {
                    section { class: "selection-panel",
                        SearchPicker {
                            value: query(),
                            suggestions: suggestions,
                            on_input: move |text| query.set(text),
                            on_submit: submit,
                        }
                    }
                }

                CycleBoard {
                    held: held,
                    upcoming: upcoming,
                    champion: champion,
                    champion_alive: champion_alive,
                    on_rotate: rotate,
                    on_champion_death: champion_death,
                    on_reset: reset,
                }
            }
        }
    }
}
