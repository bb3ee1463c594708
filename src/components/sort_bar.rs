//! Filter and sort controls for the selection grid.

use cyclesight_core::SortKey;
use dioxus::prelude::*;

/// Props for the sort bar.
#[derive(Props, Clone, PartialEq)]
pub struct SortBarProps {
    /// Current filter text
    pub filter: String,
    /// Current sort key
    pub sort: SortKey,
    /// Sort direction
    pub ascending: bool,
    /// Called on every filter edit
    pub on_filter: EventHandler<String>,
    /// Called when a sort key is chosen
    pub on_sort: EventHandler<SortKey>,
    /// Called when the direction toggle is clicked
    pub on_toggle: EventHandler<()>,
}

/// Free-text filter input plus sort-key button group and direction
/// toggle.
#[component]
pub fn SortBar(props: SortBarProps) -> Element {
    rsx! {
        div { class: "sort-bar",
            input {
                class: "input-field",
                placeholder: "Search cards...",
                value: "{props.filter}",
                oninput: move |e| props.on_filter.call(e.value()),
            }
            div { class: "sort-keys",
                for key in SortKey::all() {
                    {
                        let key = *key;
                        let selected = key == props.sort;
                        let on_sort = props.on_sort; // Callback is Copy
                        let class = if selected { "btn-sort selected" } else { "btn-sort" };
                        rsx! {
                            button {
                                key: "{key}",
                                class: "{class}",
                                onclick: move |_| on_sort.call(key),
                                "{key}"
                            }
                        }
                    }
                }
                button {
                    class: "btn-sort direction",
                    onclick: move |_| props.on_toggle.call(()),
                    if props.ascending { "Ascending" } else { "Descending" }
                }
            }
        }
    }
}
