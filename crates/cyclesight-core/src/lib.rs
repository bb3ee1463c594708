//! Cyclesight Core Library
//!
//! Engine behind the cyclesight deck-cycle tracker: a static card
//! catalog, a rotating cycle queue with champion lifecycle handling,
//! and an availability pool with evolution and champion exclusivity
//! rules. The UI is a pure projection over this crate; everything
//! here is synchronous and testable without a rendering environment.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use cyclesight_core::{Catalog, DeckSession};
//!
//! let mut session = DeckSession::new(Arc::new(Catalog::standard()));
//!
//! session.pick("Hog Rider")?;
//! session.pick("Fireball")?;
//!
//! assert_eq!(session.committed_count(), 2);
//! for slot in session.upcoming() {
//!     println!("{} up in {}", slot.card.name, slot.label());
//! }
//! # Ok::<(), cyclesight_core::CycleError>(())
//! ```

pub mod catalog;
pub mod cycle;
pub mod error;
pub mod pool;
pub mod session;
pub mod types;

// Re-exports
pub use catalog::Catalog;
pub use cycle::{CycleTracker, UpcomingSlot, DECK_SIZE};
pub use error::{CycleError, CycleResult};
pub use pool::AvailablePool;
pub use session::{DeckSession, EVOLUTION_SLOTS};
pub use types::{counterpart_of, CardItem, IconSet, Rarity, SortKey, EVOLVED_PREFIX};
