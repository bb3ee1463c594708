//! Theme: color constants and global styles.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
