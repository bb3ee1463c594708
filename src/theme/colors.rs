//! Color constants for the cyclesight UI.
//!
//! Dark arena palette with one accent per rarity tier.

#![allow(dead_code)]

// === BACKGROUNDS ===
pub const ARENA_BLACK: &str = "#0b0b10";
pub const ARENA_PANEL: &str = "#12121a";
pub const ARENA_BORDER: &str = "#23232f";

// === ACCENTS ===
pub const ELIXIR_PINK: &str = "#e661d8";
pub const GOLD: &str = "#d4af37";
pub const CYAN: &str = "#3ec7d4";

// === RARITY ===
pub const COMMON: &str = "#9aa5b1";
pub const RARE: &str = "#ff9f2e";
pub const EPIC: &str = "#b45cff";
pub const LEGENDARY: &str = "#4fd8e0";
pub const CHAMPION: &str = "#ffd700";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f2f2f5";
pub const TEXT_SECONDARY: &str = "rgba(242, 242, 245, 0.7)";
pub const TEXT_MUTED: &str = "rgba(242, 242, 245, 0.45)";

// === SEMANTIC ===
pub const DANGER: &str = "#ff3b5c";
pub const WARNING: &str = "#ffb020";
