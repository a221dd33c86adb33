/// Image loading for carousel and lightbox slides
///
/// This module handles:
/// - Decoding image files off the UI thread (loader.rs)
/// - Tracking per-reference load state for the views (slots.rs)
///
/// Navigation never waits on this module: a slide whose image is still
/// loading or failed to load shows a placeholder and can be skipped past.

pub mod loader;
pub mod slots;

pub use loader::{load_image, LoadError, LoadedImage};
pub use slots::{ImageSlots, Slot};
