//! The cycle tracker: a rotating queue modeling card draw order.
//!
//! Cards committed to the deck enter a stack whose tail segment is
//! "upcoming" (due to cycle in) and whose head segment is "held"
//! (currently playable). A champion never sits in the stack while it
//! is alive; it re-enters rotation on death.

use crate::error::{CycleError, CycleResult};
use crate::types::CardItem;

/// Total cards committed to a complete deck.
pub const DECK_SIZE: usize = 8;

/// An upcoming card with its cycle position.
///
/// Position 1 is the next card to cycle in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingSlot {
    pub card: CardItem,
    pub position: usize,
}

impl UpcomingSlot {
    pub fn is_next(&self) -> bool {
        self.position == 1
    }

    /// Display label: "NEXT" for position 1, the position otherwise.
    pub fn label(&self) -> String {
        if self.is_next() {
            "NEXT".to_string()
        } else {
            self.position.to_string()
        }
    }
}

/// Rotating-queue state for one deck.
#[derive(Debug, Clone, Default)]
pub struct CycleTracker {
    stack: Vec<CardItem>,
    /// Set on the first champion pick; survives champion death so the
    /// committed count and a later re-activation keep working. Only
    /// `reset` clears it.
    champion: Option<CardItem>,
    champion_alive: bool,
}

impl CycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards between the held partition and the tail.
    ///
    /// An alive champion occupies one virtual hand slot, narrowing the
    /// upcoming window from 4 to 3.
    fn boundary_offset(&self) -> usize {
        if self.champion_alive {
            3
        } else {
            4
        }
    }

    /// Commit a card to the cycle.
    ///
    /// Non-champions join the tail of the stack. A champion becomes
    /// the alive champion instead, replacing any previous one.
    pub fn pick_card(&mut self, card: CardItem) {
        if card.is_champion() {
            tracing::debug!(champion = %card.name, "champion picked");
            self.champion = Some(card);
            self.champion_alive = true;
        } else {
            tracing::debug!(card = %card.name, "card stacked");
            self.stack.push(card);
        }
    }

    /// Play a held card: it cycles to the tail and the card at the
    /// next-up boundary takes its place.
    ///
    /// A held champion (one that cycled back in after dying) becomes
    /// alive again instead of re-entering the stack.
    pub fn rotate_held(&mut self, index: usize) -> CycleResult<()> {
        let held = self.held_len();
        if index >= held {
            return Err(CycleError::NotHeld { index, held });
        }

        let clicked = self.stack.remove(index);
        // index < held_len guarantees the shortened stack still covers
        // the boundary offset, so this subtraction cannot underflow.
        let boundary = self.stack.len() - self.boundary_offset();
        let replacement = self.stack.remove(boundary);
        self.stack.insert(index, replacement);

        if clicked.is_champion() {
            tracing::debug!(champion = %clicked.name, "champion re-activated from hand");
            self.champion = Some(clicked);
            self.champion_alive = true;
        } else {
            tracing::debug!(card = %clicked.name, "held card cycled to tail");
            self.stack.push(clicked);
        }
        Ok(())
    }

    /// The alive champion dies and re-enters normal rotation.
    ///
    /// The second-to-last stacked card is removed, the champion is
    /// appended, then the removed card is appended. With fewer than
    /// two stacked cards the removal index clamps toward the head; an
    /// empty stack simply receives the champion.
    pub fn resolve_champion_death(&mut self) -> CycleResult<()> {
        if !self.champion_alive {
            return Err(CycleError::NoChampionAlive);
        }
        let champion = self
            .champion
            .clone()
            .ok_or(CycleError::NoChampionAlive)?;
        self.champion_alive = false;

        if self.stack.is_empty() {
            self.stack.push(champion);
        } else {
            let idx = self.stack.len().saturating_sub(2);
            let replaced = self.stack.remove(idx);
            self.stack.push(champion);
            self.stack.push(replaced);
        }
        tracing::debug!("champion defeated, cycled into stack");
        Ok(())
    }

    /// Clear all cycle state.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.champion = None;
        self.champion_alive = false;
    }

    // === Projections ===

    pub fn held_len(&self) -> usize {
        self.stack.len().saturating_sub(self.boundary_offset())
    }

    /// Cards currently in hand, in stack order.
    pub fn held(&self) -> &[CardItem] {
        &self.stack[..self.held_len()]
    }

    /// Cards due to cycle in, labeled with their cycle position.
    ///
    /// Positions count from `index + 1` once the stack holds more than
    /// 4 cards; while it is still filling they count from
    /// `index + (5 - stack_len)` so the numbering stays stable.
    pub fn upcoming(&self) -> Vec<UpcomingSlot> {
        let len = self.stack.len();
        let start = if len <= 4 { 5 - len } else { 1 };
        self.stack[self.held_len()..]
            .iter()
            .enumerate()
            .map(|(i, card)| UpcomingSlot {
                card: card.clone(),
                position: i + start,
            })
            .collect()
    }

    /// Cards committed overall: stacked cards plus the champion slot.
    ///
    /// The champion keeps counting once picked, even after it has
    /// cycled back into the stack.
    pub fn committed_count(&self) -> usize {
        self.stack.len() + usize::from(self.champion.is_some())
    }

    pub fn deck_complete(&self) -> bool {
        self.committed_count() >= DECK_SIZE
    }

    pub fn champion_alive(&self) -> bool {
        self.champion_alive
    }

    pub fn champion(&self) -> Option<&CardItem> {
        self.champion.as_ref()
    }

    pub fn stack(&self) -> &[CardItem] {
        &self.stack
    }

    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }
}
