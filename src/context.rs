//! Session context for cyclesight.
//!
//! Provides the shared [`DeckSession`] to all components via
//! `use_context`; the session is provided once in the App root.

use std::sync::Arc;

use cyclesight_core::{Catalog, DeckSession};
use dioxus::prelude::*;

/// Get the launch-time catalog (custom file or built-in).
pub fn catalog() -> Arc<Catalog> {
    crate::catalog()
}

/// Hook to access the shared deck session from context.
///
/// # Example
///
/// ```ignore
/// let mut session = use_session();
/// if let Err(e) = session.write().pick("Hog Rider") {
///     tracing::warn!("pick rejected: {}", e);
/// }
/// ```
pub fn use_session() -> Signal<DeckSession> {
    use_context::<Signal<DeckSession>>()
}
