use cyclesight_core::DeckSession;
use dioxus::prelude::*;

use crate::context::catalog;
use crate::pages::{Picker, Search};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - click-to-pick deck tracker
/// - `/search` - search-and-submit variant of the same tracker
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Picker {},
    #[route("/search")]
    Search {},
}

/// Root application component.
///
/// Provides global styles, the shared deck session, and routing.
/// Both page variants mutate the same session, so switching routes
/// keeps the deck in progress.
#[component]
pub fn App() -> Element {
    let session: Signal<DeckSession> = use_signal(|| DeckSession::new(catalog()));
    use_context_provider(|| session);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
