//! # Vesper Core
//!
//! Leaf value types for the Vesper rendering abstraction:
//! - [`geometry`] - integer extents, offsets and rectangles with component-wise arithmetic
//! - [`flags`] - strongly typed flag sets over plain bit enumerations

pub mod flags;
pub mod geometry;

pub use flags::{FlagBits, FlagStorage, Flags};
pub use geometry::{Extent2d, Extent3d, Offset2d, Offset3d, Rect2d};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the core library version.
pub fn init() {
    log::info!("Vesper Core v{} initialized", VERSION);
}
