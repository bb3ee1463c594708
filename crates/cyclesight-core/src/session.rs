//! Deck session: the facade a UI talks to.
//!
//! Ties the catalog, cycle tracker, and available pool together and
//! applies the cross-cutting pick rules (variant exclusivity, the
//! two-evolution cap, champion exclusivity).

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::cycle::{CycleTracker, UpcomingSlot};
use crate::error::{CycleError, CycleResult};
use crate::pool::AvailablePool;
use crate::types::{CardItem, SortKey};

/// Evolution slots in a deck.
pub const EVOLUTION_SLOTS: usize = 2;

/// One deck-building session: all state behind both UI variants.
pub struct DeckSession {
    catalog: Arc<Catalog>,
    tracker: CycleTracker,
    pool: AvailablePool,
}

impl DeckSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let pool = AvailablePool::from_catalog(&catalog);
        Self {
            catalog,
            tracker: CycleTracker::new(),
            pool,
        }
    }

    /// Commit a card by name.
    ///
    /// Applies every pick side effect: the card (and its evolved/base
    /// counterpart) leaves the pool, a second committed evolution
    /// empties the remaining evolved variants, and a champion pick
    /// empties the remaining champions.
    pub fn pick(&mut self, raw: &str) -> CycleResult<()> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(CycleError::EmptyPick);
        }
        if self.deck_complete() {
            return Err(CycleError::DeckComplete);
        }
        let card = self.catalog.require(name)?.clone();
        if !self.pool.contains(name) {
            return Err(CycleError::NotAvailable(name.to_string()));
        }

        self.tracker.pick_card(card.clone());
        self.pool.commit(name);
        if self.evolved_committed() >= EVOLUTION_SLOTS {
            self.pool.prune_evolved();
        }
        if card.is_champion() {
            self.pool.prune_champions(&self.catalog);
        }
        tracing::info!(card = %card.name, committed = self.committed_count(), "picked");
        Ok(())
    }

    /// Search-and-submit pick: resolve a case-insensitive exact name
    /// match among available cards, then commit it.
    pub fn pick_exact(&mut self, query: &str) -> CycleResult<()> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CycleError::EmptyPick);
        }
        match self.pool.resolve_exact(&self.catalog, query) {
            Some(card) => {
                let name = card.name.clone();
                self.pick(&name)
            }
            // Distinguish a bad name from an exhausted one
            None => match self.catalog.get_ignore_case(query) {
                Some(card) => Err(CycleError::NotAvailable(card.name.clone())),
                None => Err(CycleError::UnknownCard(query.to_string())),
            },
        }
    }

    /// Play a held card at `index`; see [`CycleTracker::rotate_held`].
    pub fn rotate_held(&mut self, index: usize) -> CycleResult<()> {
        self.tracker.rotate_held(index)
    }

    /// The alive champion dies and cycles back into the stack.
    pub fn resolve_champion_death(&mut self) -> CycleResult<()> {
        self.tracker.resolve_champion_death()
    }

    /// Empty the cycle and restore the full pool.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.pool.restore(&self.catalog);
        tracing::info!("session reset");
    }

    // === Projections ===

    pub fn held(&self) -> &[CardItem] {
        self.tracker.held()
    }

    pub fn upcoming(&self) -> Vec<UpcomingSlot> {
        self.tracker.upcoming()
    }

    /// Filtered, sorted pool projection for the selection surface.
    pub fn available(&self, query: &str, sort: SortKey, ascending: bool) -> Vec<CardItem> {
        self.pool.filtered(&self.catalog, query, sort, ascending)
    }

    pub fn committed_count(&self) -> usize {
        self.tracker.committed_count()
    }

    pub fn deck_complete(&self) -> bool {
        self.tracker.deck_complete()
    }

    pub fn champion(&self) -> Option<&CardItem> {
        self.tracker.champion()
    }

    pub fn champion_alive(&self) -> bool {
        self.tracker.champion_alive()
    }

    /// Evolved cards committed to the stack so far.
    pub fn evolved_committed(&self) -> usize {
        self.tracker.stack().iter().filter(|c| c.is_evolved()).count()
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}
