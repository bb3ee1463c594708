//! The available pool: cards not yet committed to the cycle.
//!
//! The pool only shrinks while a deck is being built; `restore` is
//! the single way back to the full catalog.

use crate::catalog::Catalog;
use crate::types::{counterpart_of, CardItem, SortKey, EVOLVED_PREFIX};

/// Ordered set of still-selectable card names.
#[derive(Debug, Clone, Default)]
pub struct AvailablePool {
    names: Vec<String>,
}

impl AvailablePool {
    /// Seed the pool with every catalog card, in catalog order.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            names: catalog.all_names(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Remove a committed card and its evolved/base counterpart.
    pub fn commit(&mut self, name: &str) {
        let counterpart = counterpart_of(name);
        self.names.retain(|n| n != name && *n != counterpart);
    }

    /// Remove every remaining evolved variant.
    ///
    /// Called once the two evolution slots are filled.
    pub fn prune_evolved(&mut self) {
        self.names.retain(|n| !n.starts_with(EVOLVED_PREFIX));
    }

    /// Remove every remaining champion.
    ///
    /// Called once a champion is committed; only one may be active.
    pub fn prune_champions(&mut self, catalog: &Catalog) {
        self.names
            .retain(|n| !catalog.get(n).is_some_and(|c| c.is_champion()));
    }

    /// Restore the full catalog pool.
    pub fn restore(&mut self, catalog: &Catalog) {
        self.names = catalog.all_names();
    }

    /// Filtered, sorted projection for the selection surface.
    ///
    /// Case-insensitive substring filter, then a stable sort by the
    /// selected key, reversed when descending.
    pub fn filtered(
        &self,
        catalog: &Catalog,
        query: &str,
        sort: SortKey,
        ascending: bool,
    ) -> Vec<CardItem> {
        let query = query.to_lowercase();
        let mut cards: Vec<CardItem> = self
            .names
            .iter()
            .filter(|n| n.to_lowercase().contains(&query))
            .filter_map(|n| catalog.get(n).cloned())
            .collect();
        cards.sort_by(|a, b| {
            let ord = match sort {
                SortKey::Elixir => a.elixir.cmp(&b.elixir),
                SortKey::Rarity => a.rarity.cmp(&b.rarity),
                SortKey::Name => a.name.cmp(&b.name),
            };
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
        cards
    }

    /// First available card whose name matches exactly, ignoring case.
    pub fn resolve_exact<'a>(&self, catalog: &'a Catalog, query: &str) -> Option<&'a CardItem> {
        self.names
            .iter()
            .find(|n| n.eq_ignore_ascii_case(query))
            .and_then(|n| catalog.get(n))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rarity;

    fn small_catalog() -> Catalog {
        Catalog::from_cards(vec![
            CardItem::new("Knight", 3, Rarity::Common),
            CardItem::new("Evolved Knight", 3, Rarity::Common),
            CardItem::new("Bats", 2, Rarity::Common),
            CardItem::new("Evolved Bats", 2, Rarity::Common),
            CardItem::new("Fireball", 4, Rarity::Rare),
            CardItem::new("Sparky", 6, Rarity::Legendary),
            CardItem::new("Golden Knight", 4, Rarity::Champion),
            CardItem::new("Monk", 5, Rarity::Champion),
        ])
        .unwrap()
    }

    #[test]
    fn test_seeding_keeps_catalog_order() {
        let catalog = small_catalog();
        let pool = AvailablePool::from_catalog(&catalog);
        assert_eq!(pool.len(), catalog.len());
        assert_eq!(pool.names()[0], "Knight");
    }

    #[test]
    fn test_commit_removes_card_and_counterpart() {
        let catalog = small_catalog();
        let mut pool = AvailablePool::from_catalog(&catalog);

        pool.commit("Knight");
        assert!(!pool.contains("Knight"));
        assert!(!pool.contains("Evolved Knight"));
        assert!(pool.contains("Bats"));

        pool.commit("Evolved Bats");
        assert!(!pool.contains("Evolved Bats"));
        assert!(!pool.contains("Bats"));
    }

    #[test]
    fn test_prune_evolved() {
        let catalog = small_catalog();
        let mut pool = AvailablePool::from_catalog(&catalog);
        pool.prune_evolved();
        assert!(!pool.contains("Evolved Knight"));
        assert!(!pool.contains("Evolved Bats"));
        assert!(pool.contains("Knight"));
    }

    #[test]
    fn test_prune_champions() {
        let catalog = small_catalog();
        let mut pool = AvailablePool::from_catalog(&catalog);
        pool.prune_champions(&catalog);
        assert!(!pool.contains("Golden Knight"));
        assert!(!pool.contains("Monk"));
        assert!(pool.contains("Knight"));
    }

    #[test]
    fn test_restore() {
        let catalog = small_catalog();
        let mut pool = AvailablePool::from_catalog(&catalog);
        pool.commit("Knight");
        pool.prune_champions(&catalog);
        pool.restore(&catalog);
        assert_eq!(pool.len(), catalog.len());
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let catalog = small_catalog();
        let pool = AvailablePool::from_catalog(&catalog);
        let hits = pool.filtered(&catalog, "kNiGhT", SortKey::Name, true);
        let names: Vec<_> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Evolved Knight", "Golden Knight", "Knight"]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let catalog = small_catalog();
        let pool = AvailablePool::from_catalog(&catalog);
        assert_eq!(pool.filtered(&catalog, "", SortKey::Name, true).len(), 8);
    }

    #[test]
    fn test_sort_by_elixir_and_direction() {
        let catalog = small_catalog();
        let pool = AvailablePool::from_catalog(&catalog);

        let asc = pool.filtered(&catalog, "", SortKey::Elixir, true);
        assert_eq!(asc.first().unwrap().elixir, 2);
        assert_eq!(asc.last().unwrap().elixir, 6);

        let desc = pool.filtered(&catalog, "", SortKey::Elixir, false);
        assert_eq!(desc.first().unwrap().elixir, 6);
        assert_eq!(desc.last().unwrap().elixir, 2);
    }

    #[test]
    fn test_sort_by_rarity_ranking() {
        let catalog = small_catalog();
        let pool = AvailablePool::from_catalog(&catalog);
        let cards = pool.filtered(&catalog, "", SortKey::Rarity, true);
        assert_eq!(cards.first().unwrap().rarity, Rarity::Common);
        assert_eq!(cards.last().unwrap().rarity, Rarity::Champion);
        // Stable sort keeps catalog order within a rarity tier
        assert_eq!(cards[0].name, "Knight");
    }

    #[test]
    fn test_resolve_exact() {
        let catalog = small_catalog();
        let mut pool = AvailablePool::from_catalog(&catalog);
        assert_eq!(pool.resolve_exact(&catalog, "fireball").unwrap().name, "Fireball");
        // Substring is not enough for an exact resolve
        assert!(pool.resolve_exact(&catalog, "Fire").is_none());

        pool.commit("Fireball");
        assert!(pool.resolve_exact(&catalog, "Fireball").is_none());
    }
}
