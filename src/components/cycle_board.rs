//! Cycle board component for cyclesight.
//!
//! Displays the deck partition driven by the engine:
//!
//! - Held row: cards currently in hand, clickable to play them
//! - Upcoming row: cards due to cycle in, labeled "NEXT", 2, 3...
//! - Champion slot: the alive champion with its "Champion Defeated"
//!   button, or the reminder that it is back in rotation

use cyclesight_core::{CardItem, UpcomingSlot};
use dioxus::prelude::*;

/// A single held card. Clicking it plays the card.
///
/// # Props
///
/// * `card` - The card to display
/// * `index` - Position within the held row, passed back on click
/// * `on_click` - Called with the index when the card is played
#[component]
pub fn HeldCard(card: CardItem, index: usize, on_click: EventHandler<usize>) -> Element {
    let frame_class = format!("card-frame held {}", card.rarity);

    rsx! {
        button {
            class: "{frame_class}",
            onclick: move |_| on_click.call(index),
            title: "play {card.name}",
            img {
                class: "card-icon",
                src: "{card.icons.medium}",
                alt: "{card.name}",
            }
            span { class: "card-cost", "{card.elixir}" }
        }
    }
}

/// A single upcoming card with its cycle position badge.
#[component]
pub fn UpcomingCard(slot: UpcomingSlot) -> Element {
    let badge_class = if slot.is_next() {
        "cycle-badge next"
    } else {
        "cycle-badge"
    };

    rsx! {
        div { class: "card-frame upcoming {slot.card.rarity}",
            img {
                class: "card-icon",
                src: "{slot.card.icons.medium}",
                alt: "{slot.card.name}",
            }
            span { class: "{badge_class}", "{slot.label()}" }
        }
    }
}

/// Props for the cycle board.
#[derive(Props, Clone, PartialEq)]
pub struct CycleBoardProps {
    /// Cards currently in hand
    pub held: Vec<CardItem>,
    /// Cards due to cycle in, already labeled by the engine
    pub upcoming: Vec<UpcomingSlot>,
    /// The committed champion, if any
    pub champion: Option<CardItem>,
    /// Whether the champion is alive (out of rotation)
    pub champion_alive: bool,
    /// Called with the held index when a held card is played
    pub on_rotate: EventHandler<usize>,
    /// Called when the alive champion is defeated
    pub on_champion_death: EventHandler<()>,
    /// Called when the deck should be cleared
    pub on_reset: EventHandler<()>,
}

/// The deck side of the tracker: held row, upcoming row, champion
/// slot, and the reset control.
#[component]
pub fn CycleBoard(props: CycleBoardProps) -> Element {
    rsx! {
        section { class: "cycle-board",
            div { class: "board-actions",
                button {
                    class: "btn-reset",
                    onclick: move |_| props.on_reset.call(()),
                    "Reset Deck"
                }
                if props.champion_alive {
                    button {
                        class: "btn-champion-death",
                        onclick: move |_| props.on_champion_death.call(()),
                        "Champion Defeated"
                    }
                }
            }

            if let Some(champion) = props.champion.as_ref() {
                div { class: "champion-slot",
                    div { class: "card-frame champion-card {champion.rarity}",
                        img {
                            class: "card-icon",
                            src: "{champion.icons.medium}",
                            alt: "{champion.name}",
                        }
                    }
                    span { class: "champion-state",
                        if props.champion_alive { "champion alive" } else { "champion in rotation" }
                    }
                }
            }

            h2 { class: "section-header", "In Hand" }
            div { class: "held-row",
                if props.held.is_empty() {
                    p { class: "empty-state", "Pick cards to start tracking the cycle." }
                } else {
                    for (index, card) in props.held.iter().enumerate() {
                        HeldCard {
                            key: "{card.name}",
                            card: card.clone(),
                            index: index,
                            on_click: props.on_rotate,
                        }
                    }
                }
            }

            h2 { class: "section-header", "Upcoming" }
            div { class: "upcoming-row",
                for slot in props.upcoming.iter() {
                    UpcomingCard {
                        key: "{slot.card.name}",
                        slot: slot.clone(),
                    }
                }
            }
        }
    }
}
