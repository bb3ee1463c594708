//! Search-and-submit selection surface.
//!
//! The second UX variant: a free-text input whose submit commits an
//! exact card name, with a suggestion list for discovery. Whitespace
//! submissions are ignored here, before the engine is asked.

use cyclesight_core::CardItem;
use dioxus::prelude::*;

/// Props for the search picker.
#[derive(Props, Clone, PartialEq)]
pub struct SearchPickerProps {
    /// Current query text
    pub value: String,
    /// Available cards matching the query
    pub suggestions: Vec<CardItem>,
    /// Called on every query edit
    pub on_input: EventHandler<String>,
    /// Called with the trimmed query on submit
    pub on_submit: EventHandler<String>,
}

/// Text input with submit button and suggestion list.
///
/// Enter submits, like the button. Clicking a suggestion fills the
/// input so submit picks exactly that card.
#[component]
pub fn SearchPicker(props: SearchPickerProps) -> Element {
    let submit_value = props.value.clone();
    let keydown_value = props.value.clone();
    let on_submit_for_click = props.on_submit;
    let on_submit_for_key = props.on_submit;

    let submit = move |_| {
        let query = submit_value.trim().to_string();
        if !query.is_empty() {
            on_submit_for_click.call(query);
        }
    };

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            let query = keydown_value.trim().to_string();
            if !query.is_empty() {
                on_submit_for_key.call(query);
            }
        }
    };

    rsx! {
        div { class: "search-picker",
            div { class: "search-row",
                input {
                    class: "input-field",
                    placeholder: "type a card name...",
                    value: "{props.value}",
                    oninput: move |e| props.on_input.call(e.value()),
                    onkeydown: on_keydown,
                }
                button {
                    class: "btn-primary",
                    onclick: submit,
                    "Add"
                }
            }
            div { class: "suggestion-list",
                for card in props.suggestions.iter() {
                    {
                        let name = card.name.clone();
                        let on_input = props.on_input; // Callback is Copy
                        rsx! {
                            button {
                                key: "{card.name}",
                                class: "suggestion {card.rarity}",
                                onclick: move |_| on_input.call(name.clone()),
                                span { class: "suggestion-name", "{card.name}" }
                                span { class: "suggestion-cost", "{card.elixir}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
