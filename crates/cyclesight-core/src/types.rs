//! Core types for cyclesight

use serde::{Deserialize, Serialize};

/// Name prefix marking an evolved card variant.
///
/// An evolved card and its base form share availability: committing
/// either removes both from the pool.
pub const EVOLVED_PREFIX: &str = "Evolved ";

/// Card rarity tiers.
///
/// Declared in ranking order, so the derived `Ord` matches the fixed
/// sort ordering (common < rare < epic < legendary < champion).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Champion,
}

impl Rarity {
    /// Position in the fixed rarity ranking
    pub fn rank(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
            Rarity::Champion => "champion",
        }
    }

    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Common,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
            Rarity::Champion,
        ]
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Icon references for a card.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IconSet {
    /// Medium-resolution icon path or URL
    pub medium: String,
}

impl IconSet {
    /// Derive the default icon location from a card name.
    pub fn for_name(name: &str) -> Self {
        Self {
            medium: format!("/assets/cards/{}.png", slug(name)),
        }
    }
}

/// Lowercased, dash-separated form of a card name for asset paths.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// A single catalog card.
///
/// Immutable once constructed; the catalog is the only producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardItem {
    /// Display name, doubles as the card identifier
    pub name: String,
    /// Elixir cost to play the card
    pub elixir: u8,
    pub rarity: Rarity,
    /// Missing icons are filled in from the name at catalog build time
    #[serde(default)]
    pub icons: IconSet,
}

impl CardItem {
    /// Create a card with the default icon location for its name.
    pub fn new(name: impl Into<String>, elixir: u8, rarity: Rarity) -> Self {
        let name = name.into();
        let icons = IconSet::for_name(&name);
        Self {
            name,
            elixir,
            rarity,
            icons,
        }
    }

    pub fn is_champion(&self) -> bool {
        self.rarity == Rarity::Champion
    }

    pub fn is_evolved(&self) -> bool {
        self.name.starts_with(EVOLVED_PREFIX)
    }

    /// Name of the paired variant: base form for an evolved card,
    /// evolved form for a base card.
    pub fn counterpart_name(&self) -> String {
        counterpart_of(&self.name)
    }
}

/// Paired-variant name for any card name.
pub fn counterpart_of(name: &str) -> String {
    match name.strip_prefix(EVOLVED_PREFIX) {
        Some(base) => base.to_string(),
        None => format!("{EVOLVED_PREFIX}{name}"),
    }
}

/// Sort key for the selection surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Name,
    #[default]
    Elixir,
    Rarity,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Elixir => "Elixir",
            SortKey::Rarity => "Rarity",
        }
    }

    pub fn all() -> &'static [SortKey] {
        &[SortKey::Name, SortKey::Elixir, SortKey::Rarity]
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
