//! Property-based tests for the cycle engine
//!
//! Uses proptest to verify invariants of the tracker, pool, and
//! session under arbitrary operation sequences.

use std::sync::Arc;

use proptest::prelude::*;

use cyclesight_core::{Catalog, DeckSession, SortKey};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Operations a user can perform on a session
#[derive(Debug, Clone)]
enum SessionOp {
    Pick(usize),       // Index into the current available list
    RotateHeld(usize), // Index into the current held list
    ChampionDeath,
    Reset,
}

/// Generate a sequence of session operations
fn session_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<SessionOp>> {
    prop::collection::vec(
        prop_oneof![
            5 => (0..200usize).prop_map(SessionOp::Pick),
            3 => (0..8usize).prop_map(SessionOp::RotateHeld),
            1 => Just(SessionOp::ChampionDeath),
            1 => Just(SessionOp::Reset),
        ],
        0..max_ops,
    )
}

fn apply(session: &mut DeckSession, op: &SessionOp) {
    match op {
        SessionOp::Pick(i) => {
            let available = session.available("", SortKey::Name, true);
            if !available.is_empty() {
                let name = available[i % available.len()].name.clone();
                let _ = session.pick(&name);
            }
        }
        SessionOp::RotateHeld(i) => {
            let held = session.held().len();
            if held > 0 {
                let _ = session.rotate_held(i % held);
            }
        }
        SessionOp::ChampionDeath => {
            let _ = session.resolve_champion_death();
        }
        SessionOp::Reset => session.reset(),
    }
}

fn new_session() -> DeckSession {
    DeckSession::new(Arc::new(Catalog::standard()))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Held and upcoming always partition the stack, in order.
    #[test]
    fn held_and_upcoming_partition_stack(ops in session_ops_strategy(40)) {
        let mut session = new_session();
        for op in &ops {
            apply(&mut session, op);

            let held = session.held().to_vec();
            let upcoming = session.upcoming();
            let stacked = held.len() + upcoming.len();
            prop_assert_eq!(stacked + usize::from(session.champion().is_some()),
                session.committed_count());

            // Upcoming positions are contiguous and start at 1 once
            // the stack is past its fill-in phase.
            for (i, pair) in upcoming.windows(2).enumerate() {
                prop_assert_eq!(pair[1].position, pair[0].position + 1, "window {}", i);
            }
            if stacked > 4 {
                prop_assert_eq!(upcoming.first().map(|s| s.position), Some(1));
            }
        }
    }

    /// The committed count never exceeds the deck size and the pool
    /// never contains a committed card.
    #[test]
    fn pool_and_stack_stay_disjoint(ops in session_ops_strategy(40)) {
        let mut session = new_session();
        for op in &ops {
            apply(&mut session, op);

            // The champion double-counts once it has died into the
            // stack, so the ceiling is one above the deck size.
            prop_assert!(session.committed_count() <= cyclesight_core::DECK_SIZE + 1);
            prop_assert!(session.held().len() + session.upcoming().len()
                <= cyclesight_core::DECK_SIZE);

            let available = session.available("", SortKey::Name, true);
            for card in session.held() {
                prop_assert!(available.iter().all(|a| a.name != card.name));
            }
            for slot in session.upcoming() {
                prop_assert!(available.iter().all(|a| a.name != slot.card.name));
            }
        }
    }

    /// At most two evolved cards are ever committed, and once two are,
    /// no evolved card remains selectable.
    #[test]
    fn evolution_slots_capped(ops in session_ops_strategy(40)) {
        let mut session = new_session();
        for op in &ops {
            apply(&mut session, op);

            prop_assert!(session.evolved_committed() <= cyclesight_core::EVOLUTION_SLOTS);
            if session.evolved_committed() == cyclesight_core::EVOLUTION_SLOTS {
                let evolved_left = session
                    .available("", SortKey::Name, true)
                    .iter()
                    .filter(|c| c.is_evolved())
                    .count();
                prop_assert_eq!(evolved_left, 0);
            }
        }
    }

    /// No champion is ever selectable while one is committed.
    #[test]
    fn single_champion_invariant(ops in session_ops_strategy(40)) {
        let mut session = new_session();
        for op in &ops {
            apply(&mut session, op);

            if session.champion().is_some() {
                let champions_left = session
                    .available("", SortKey::Name, true)
                    .iter()
                    .filter(|c| c.is_champion())
                    .count();
                prop_assert_eq!(champions_left, 0);
            }
        }
    }

    /// Rotation preserves the stacked multiset unless a champion
    /// leaves the stack to go alive.
    #[test]
    fn rotation_preserves_cards(ops in session_ops_strategy(30), index in 0..8usize) {
        let mut session = new_session();
        for op in &ops {
            apply(&mut session, op);
        }

        let mut before: Vec<String> = session
            .held()
            .iter()
            .map(|c| c.name.clone())
            .chain(session.upcoming().iter().map(|s| s.card.name.clone()))
            .collect();

        let held = session.held().len();
        if held == 0 {
            return Ok(());
        }
        let clicked = session.held()[index % held].name.clone();
        let was_alive = session.champion_alive();
        session.rotate_held(index % held).unwrap();

        let mut after: Vec<String> = session
            .held()
            .iter()
            .map(|c| c.name.clone())
            .chain(session.upcoming().iter().map(|s| s.card.name.clone()))
            .collect();

        if session.champion_alive() && !was_alive {
            // The clicked champion left the stack
            before.retain(|n| *n != clicked);
        }
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// Reset always restores the full pool and empties the cycle.
    #[test]
    fn reset_restores_everything(ops in session_ops_strategy(30)) {
        let mut session = new_session();
        let full_pool = session.pool_len();
        for op in &ops {
            apply(&mut session, op);
        }

        session.reset();
        prop_assert_eq!(session.pool_len(), full_pool);
        prop_assert_eq!(session.committed_count(), 0);
        prop_assert!(session.champion().is_none());
        prop_assert!(!session.champion_alive());
    }

    /// Every filtered result matches the query, case-insensitively,
    /// and sorting by elixir orders costs monotonically.
    #[test]
    fn filter_and_sort_properties(
        query in "[a-zA-Z ]{0,8}",
        ascending in any::<bool>(),
    ) {
        let session = new_session();

        let results = session.available(&query, SortKey::Elixir, ascending);
        let needle = query.to_lowercase();
        for card in &results {
            prop_assert!(card.name.to_lowercase().contains(&needle));
        }
        for pair in results.windows(2) {
            if ascending {
                prop_assert!(pair[0].elixir <= pair[1].elixir);
            } else {
                prop_assert!(pair[0].elixir >= pair[1].elixir);
            }
        }

        let by_rarity = session.available(&query, SortKey::Rarity, true);
        for pair in by_rarity.windows(2) {
            prop_assert!(pair[0].rarity.rank() <= pair[1].rarity.rank());
        }
    }
}

// ============================================================================
// Deterministic Ordering Property
// ============================================================================

/// Non-champion picks preserve pick order exactly.
#[test]
fn picks_preserve_order() {
    let mut session = new_session();
    let picks = ["Miner", "Bats", "Fireball", "Valkyrie", "The Log"];
    for name in picks {
        session.pick(name).unwrap();
    }
    let stacked: Vec<String> = session
        .held()
        .iter()
        .map(|c| c.name.clone())
        .chain(session.upcoming().iter().map(|s| s.card.name.clone()))
        .collect();
    assert_eq!(stacked, picks);
    assert_eq!(session.committed_count(), picks.len());
}
