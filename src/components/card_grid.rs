//! Selection grid: the available pool rendered as clickable tiles.

use cyclesight_core::CardItem;
use dioxus::prelude::*;

/// A single selectable card tile.
#[component]
pub fn CardTile(card: CardItem, on_click: EventHandler<String>) -> Element {
    let name = card.name.clone();

    rsx! {
        button {
            class: "card-tile {card.rarity}",
            onclick: move |_| on_click.call(name.clone()),
            title: "{card.name} ({card.elixir} elixir, {card.rarity})",
            img {
                class: "card-icon",
                src: "{card.icons.medium}",
                alt: "{card.name}",
            }
            span { class: "card-cost", "{card.elixir}" }
        }
    }
}

/// Props for the selection grid.
#[derive(Props, Clone, PartialEq)]
pub struct CardGridProps {
    /// Cards still available, already filtered and sorted
    pub cards: Vec<CardItem>,
    /// Called with the card name on pick
    pub on_pick: EventHandler<String>,
}

/// Grid of available cards.
///
/// # Example
///
/// ```ignore
/// CardGrid {
///     cards: session.read().available(&query, sort, ascending),
///     on_pick: move |name| pick(name),
/// }
/// ```
#[component]
pub fn CardGrid(props: CardGridProps) -> Element {
    rsx! {
        div { class: "card-grid",
            if props.cards.is_empty() {
                p { class: "empty-state", "No cards match." }
            } else {
                for card in props.cards.iter() {
                    CardTile {
                        key: "{card.name}",
                        card: card.clone(),
                        on_click: props.on_pick,
                    }
                }
            }
        }
    }
}
