//! Card catalog: the read-only lookup table behind the tracker.
//!
//! The built-in catalog lives here as grouped constructors so stat
//! tweaks stay isolated from the engine. A custom catalog can be
//! loaded from JSON (a plain array of cards) via `--catalog`.

use std::collections::HashMap;
use std::io::Read;

use crate::error::{CycleError, CycleResult};
use crate::types::{CardItem, IconSet, Rarity};

/// Ordered, read-only card lookup table.
#[derive(Debug)]
pub struct Catalog {
    cards: Vec<CardItem>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build the built-in catalog.
    pub fn standard() -> Self {
        let mut cards = Vec::new();
        cards.extend(commons());
        cards.extend(rares());
        cards.extend(epics());
        cards.extend(legendaries());
        cards.extend(champions());
        cards.extend(evolutions());
        // The built-in data is validated by tests, so construction
        // cannot fail outside a bad edit to the tables above.
        Self::from_cards(cards).unwrap_or_else(|e| panic!("built-in catalog invalid: {e}"))
    }

    /// Build a catalog from an explicit card list.
    ///
    /// Rejects empty lists and duplicate names; fills in default icon
    /// locations for cards that carry none.
    pub fn from_cards(cards: Vec<CardItem>) -> CycleResult<Self> {
        if cards.is_empty() {
            return Err(CycleError::InvalidCatalog("catalog is empty".to_string()));
        }
        let mut index = HashMap::with_capacity(cards.len());
        let mut cards = cards;
        for (i, card) in cards.iter_mut().enumerate() {
            if card.icons.medium.is_empty() {
                card.icons = IconSet::for_name(&card.name);
            }
            if index.insert(card.name.clone(), i).is_some() {
                return Err(CycleError::InvalidCatalog(format!(
                    "duplicate card name: {}",
                    card.name
                )));
            }
        }
        Ok(Self { cards, index })
    }

    /// Load a catalog from a JSON array of cards.
    pub fn from_json_slice(bytes: &[u8]) -> CycleResult<Self> {
        let cards: Vec<CardItem> = serde_json::from_slice(bytes)?;
        Self::from_cards(cards)
    }

    /// Load a catalog from a JSON reader (e.g. an open file).
    pub fn from_json_reader(mut reader: impl Read) -> CycleResult<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Self::from_json_slice(&buf)
    }

    pub fn get(&self, name: &str) -> Option<&CardItem> {
        self.index.get(name).map(|&i| &self.cards[i])
    }

    /// Lookup that surfaces the unknown-identifier case as an error.
    pub fn require(&self, name: &str) -> CycleResult<&CardItem> {
        self.get(name)
            .ok_or_else(|| CycleError::UnknownCard(name.to_string()))
    }

    /// Case-insensitive exact-name lookup, for search-and-submit input.
    pub fn get_ignore_case(&self, name: &str) -> Option<&CardItem> {
        self.get(name)
            .or_else(|| self.cards.iter().find(|c| c.name.eq_ignore_ascii_case(name)))
    }

    /// All card names in catalog order.
    pub fn all_names(&self) -> Vec<String> {
        self.cards.iter().map(|c| c.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardItem> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

fn card(name: &str, elixir: u8, rarity: Rarity) -> CardItem {
    CardItem::new(name, elixir, rarity)
}

fn commons() -> Vec<CardItem> {
    use Rarity::Common;
    vec![
        card("Knight", 3, Common),
        card("Archers", 3, Common),
        card("Goblins", 2, Common),
        card("Spear Goblins", 2, Common),
        card("Skeletons", 1, Common),
        card("Bomber", 2, Common),
        card("Barbarians", 5, Common),
        card("Minions", 3, Common),
        card("Minion Horde", 5, Common),
        card("Royal Giant", 6, Common),
        card("Elite Barbarians", 6, Common),
        card("Royal Recruits", 7, Common),
        card("Ice Spirit", 1, Common),
        card("Fire Spirit", 1, Common),
        card("Electro Spirit", 1, Common),
        card("Bats", 2, Common),
        card("Skeleton Barrel", 3, Common),
        card("Rascals", 5, Common),
        card("Firecracker", 3, Common),
        card("Skeleton Dragons", 4, Common),
        card("Goblin Gang", 3, Common),
        card("Zap", 2, Common),
        card("Arrows", 3, Common),
        card("Giant Snowball", 2, Common),
        card("Royal Delivery", 3, Common),
        card("Cannon", 3, Common),
        card("Mortar", 4, Common),
        card("Tesla", 4, Common),
    ]
}

fn rares() -> Vec<CardItem> {
    use Rarity::Rare;
    vec![
        card("Giant", 5, Rare),
        card("Musketeer", 4, Rare),
        card("Mini P.E.K.K.A", 4, Rare),
        card("Valkyrie", 4, Rare),
        card("Hog Rider", 4, Rare),
        card("Wizard", 5, Rare),
        card("Three Musketeers", 9, Rare),
        card("Ice Golem", 2, Rare),
        card("Mega Minion", 3, Rare),
        card("Dart Goblin", 3, Rare),
        card("Flying Machine", 4, Rare),
        card("Zappies", 4, Rare),
        card("Battle Ram", 4, Rare),
        card("Royal Hogs", 5, Rare),
        card("Battle Healer", 4, Rare),
        card("Heal Spirit", 1, Rare),
        card("Fireball", 4, Rare),
        card("Rocket", 6, Rare),
        card("Earthquake", 3, Rare),
        card("Goblin Hut", 5, Rare),
        card("Barbarian Hut", 7, Rare),
        card("Tombstone", 3, Rare),
        card("Bomb Tower", 4, Rare),
        card("Inferno Tower", 5, Rare),
        card("Furnace", 4, Rare),
        card("Elixir Collector", 6, Rare),
        card("Goblin Cage", 4, Rare),
    ]
}

fn epics() -> Vec<CardItem> {
    use Rarity::Epic;
    vec![
        card("P.E.K.K.A", 7, Epic),
        card("Balloon", 5, Epic),
        card("Witch", 5, Epic),
        card("Skeleton Army", 3, Epic),
        card("Baby Dragon", 4, Epic),
        card("Prince", 5, Epic),
        card("Giant Skeleton", 6, Epic),
        card("Dark Prince", 4, Epic),
        card("Guards", 3, Epic),
        card("Hunter", 4, Epic),
        card("Executioner", 5, Epic),
        card("Cannon Cart", 5, Epic),
        card("Electro Dragon", 5, Epic),
        card("Goblin Giant", 6, Epic),
        card("Wall Breakers", 2, Epic),
        card("Elixir Golem", 3, Epic),
        card("Electro Giant", 7, Epic),
        card("Golem", 8, Epic),
        card("Poison", 4, Epic),
        card("Lightning", 6, Epic),
        card("Freeze", 4, Epic),
        card("Rage", 2, Epic),
        card("Goblin Barrel", 3, Epic),
        card("Tornado", 3, Epic),
        card("Clone", 3, Epic),
        card("Barbarian Barrel", 2, Epic),
        card("X-Bow", 6, Epic),
        card("Goblin Drill", 4, Epic),
    ]
}

fn legendaries() -> Vec<CardItem> {
    use Rarity::Legendary;
    vec![
        card("Ice Wizard", 3, Legendary),
        card("Princess", 3, Legendary),
        card("Lava Hound", 7, Legendary),
        card("Inferno Dragon", 4, Legendary),
        card("Sparky", 6, Legendary),
        card("Miner", 3, Legendary),
        card("Bandit", 3, Legendary),
        card("Royal Ghost", 3, Legendary),
        card("Night Witch", 4, Legendary),
        card("Electro Wizard", 4, Legendary),
        card("Ram Rider", 5, Legendary),
        card("Mega Knight", 7, Legendary),
        card("Magic Archer", 4, Legendary),
        card("Fisherman", 3, Legendary),
        card("Lumberjack", 4, Legendary),
        card("Mother Witch", 4, Legendary),
        card("Phoenix", 4, Legendary),
        card("Graveyard", 5, Legendary),
        card("The Log", 2, Legendary),
    ]
}

fn champions() -> Vec<CardItem> {
    use Rarity::Champion;
    vec![
        card("Archer Queen", 5, Champion),
        card("Golden Knight", 4, Champion),
        card("Skeleton King", 4, Champion),
        card("Mighty Miner", 4, Champion),
        card("Monk", 5, Champion),
        card("Little Prince", 3, Champion),
        card("Goblinstein", 5, Champion),
    ]
}

// Evolved variants keep the stats of their base form.
fn evolutions() -> Vec<CardItem> {
    use Rarity::{Common, Rare};
    vec![
        card("Evolved Knight", 3, Common),
        card("Evolved Archers", 3, Common),
        card("Evolved Skeletons", 1, Common),
        card("Evolved Barbarians", 5, Common),
        card("Evolved Royal Giant", 6, Common),
        card("Evolved Firecracker", 3, Common),
        card("Evolved Mortar", 4, Common),
        card("Evolved Bats", 2, Common),
        card("Evolved Royal Recruits", 7, Common),
        card("Evolved Ice Spirit", 1, Common),
        card("Evolved Zap", 2, Common),
        card("Evolved Tesla", 4, Common),
        card("Evolved Bomber", 2, Common),
        card("Evolved Valkyrie", 4, Rare),
        card("Evolved Battle Ram", 4, Rare),
        card("Evolved Musketeer", 4, Rare),
        card("Evolved Wall Breakers", 2, Rarity::Epic),
        card("Evolved Goblin Barrel", 3, Rarity::Epic),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::counterpart_of;

    #[test]
    fn test_standard_catalog_builds() {
        let catalog = Catalog::standard();
        assert!(catalog.len() > 100);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::standard();
        let hog = catalog.get("Hog Rider").expect("Hog Rider in catalog");
        assert_eq!(hog.elixir, 4);
        assert_eq!(hog.rarity, Rarity::Rare);
        assert!(catalog.get("Not A Card").is_none());
    }

    #[test]
    fn test_require_unknown() {
        let catalog = Catalog::standard();
        let err = catalog.require("Not A Card").unwrap_err();
        assert!(matches!(err, CycleError::UnknownCard(_)));
    }

    #[test]
    fn test_get_ignore_case() {
        let catalog = Catalog::standard();
        assert!(catalog.get_ignore_case("hog rider").is_some());
        assert!(catalog.get_ignore_case("HOG RIDER").is_some());
        assert!(catalog.get_ignore_case("hog riderx").is_none());
    }

    #[test]
    fn test_every_evolution_has_base_form() {
        let catalog = Catalog::standard();
        for evolved in catalog.iter().filter(|c| c.is_evolved()) {
            let base = counterpart_of(&evolved.name);
            assert!(
                catalog.get(&base).is_some(),
                "missing base form for {}",
                evolved.name
            );
        }
    }

    #[test]
    fn test_champions_present() {
        let catalog = Catalog::standard();
        let champs: Vec<_> = catalog.iter().filter(|c| c.is_champion()).collect();
        assert!(champs.len() >= 2);
        assert!(champs.iter().all(|c| !c.is_evolved()));
    }

    #[test]
    fn test_icons_filled() {
        let catalog = Catalog::standard();
        assert!(catalog.iter().all(|c| !c.icons.medium.is_empty()));
    }

    #[test]
    fn test_from_cards_rejects_empty() {
        let err = Catalog::from_cards(Vec::new()).unwrap_err();
        assert!(matches!(err, CycleError::InvalidCatalog(_)));
    }

    #[test]
    fn test_from_cards_rejects_duplicates() {
        let cards = vec![
            CardItem::new("Knight", 3, Rarity::Common),
            CardItem::new("Knight", 3, Rarity::Common),
        ];
        let err = Catalog::from_cards(cards).unwrap_err();
        assert!(matches!(err, CycleError::InvalidCatalog(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"[
            {"name": "Knight", "elixir": 3, "rarity": "common"},
            {"name": "Fireball", "elixir": 4, "rarity": "rare",
             "icons": {"medium": "/custom/fireball.png"}}
        ]"#;
        let catalog = Catalog::from_json_slice(json.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        // Omitted icons are derived from the name
        assert_eq!(
            catalog.get("Knight").unwrap().icons.medium,
            "/assets/cards/knight.png"
        );
        // Supplied icons are kept as-is
        assert_eq!(
            catalog.get("Fireball").unwrap().icons.medium,
            "/custom/fireball.png"
        );
    }

    #[test]
    fn test_json_rejects_garbage() {
        let err = Catalog::from_json_slice(b"not json").unwrap_err();
        assert!(matches!(err, CycleError::CatalogJson(_)));
    }
}
