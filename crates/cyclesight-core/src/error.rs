//! Error types for the cycle engine

use thiserror::Error;

/// Main error type for cycle engine operations
#[derive(Error, Debug)]
pub enum CycleError {
    /// Card name is not present in the catalog
    #[error("Unknown card: {0}")]
    UnknownCard(String),

    /// Card exists but has already been committed or pruned from the pool
    #[error("Card not available: {0}")]
    NotAvailable(String),

    /// Pick input was empty or whitespace-only
    #[error("Empty pick input")]
    EmptyPick,

    /// Deck already holds its full complement of cards
    #[error("Deck is already complete")]
    DeckComplete,

    /// Rotation requested for a position outside the held partition
    #[error("Position {index} is not a held card ({held} held)")]
    NotHeld { index: usize, held: usize },

    /// Champion death signalled while no champion is alive
    #[error("No champion is alive")]
    NoChampionAlive,

    /// Catalog data failed validation
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Catalog JSON could not be parsed
    #[error("Catalog JSON error: {0}")]
    CatalogJson(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CycleError
pub type CycleResult<T> = Result<T, CycleError>;
