//! Click-to-pick tracker page.
//!
//! The default variant: a filterable, sortable grid of the available
//! pool next to the cycle board.

use cyclesight_core::SortKey;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CardGrid, CycleBoard, SortBar};
use crate::context::use_session;

/// Main tracker view with grid selection.
#[component]
pub fn Picker() -> Element {
    let mut session = use_session();

    // Local UI state for the selection surface
    let mut filter_text = use_signal(String::new);
    let mut sort_by = use_signal(SortKey::default);
    let mut ascending = use_signal(|| true);

    // Snapshot engine projections for this render
    let (held, upcoming, champion, champion_alive, complete, available) = {
        let s = session.read();
        (
            s.held().to_vec(),
            s.upcoming(),
            s.champion().cloned(),
            s.champion_alive(),
            s.deck_complete(),
            s.available(&filter_text.read(), sort_by(), ascending()),
        )
    };

    // Handler for picking a card from the grid
    let pick = move |name: String| {
        match session.write().pick(&name) {
            Ok(()) => filter_text.set(String::new()),
            Err(e) => tracing::warn!("pick rejected: {}", e),
        }
    };

    // Handler for playing a held card
    let rotate = move |index: usize| {
        if let Err(e) = session.write().rotate_held(index) {
            tracing::warn!("rotation rejected: {}", e);
        }
    };

    // Handler for the champion-death button
    let champion_death = move |_| {
        if let Err(e) = session.write().resolve_champion_death() {
            tracing::warn!("champion death rejected: {}", e);
        }
    };

    // Handler for resetting the deck
    let reset = move |_| {
        session.write().reset();
        filter_text.set(String::new());
    };

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                h1 { class: "page-title", "Cyclesight" }
                nav { class: "variant-nav",
                    Link { class: "variant-link", to: Route::Search {}, "search mode" }
                }
            }

            div { class: "tracker-content",
                // Selection surface, hidden once the deck is complete
                if !complete {
                    section { class: "selection-panel",
                        SortBar {
                            filter: filter_text(),
                            sort: sort_by(),
                            ascending: ascending(),
                            on_filter: move |text| filter_text.set(text),
                            on_sort: move |key| sort_by.set(key),
                            on_toggle: move |_| ascending.set(!ascending()),
                        }
                        CardGrid {
                            cards: available,
                            on_pick: pick,
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
