/// Carousel and lightbox navigation
///
/// This module handles:
/// - Immutable image sequences and wraparound arithmetic (sequence.rs)
/// - Per-project preview carousels (carousel.rs)
/// - The shared full-screen lightbox (lightbox.rs)
/// - Page-level scroll lock and key capture guards (surface.rs)
/// - The host that wires carousels to the lightbox (host.rs)
/// - Cross-fade timing (fade.rs)
///
/// Nothing here depends on iced; the views in `ui` read this state and
/// send [`GalleryMessage`]s back.

pub mod carousel;
pub mod fade;
pub mod host;
pub mod lightbox;
pub mod sequence;
pub mod surface;

pub use carousel::{Activation, Carousel};
pub use host::{GalleryHost, GalleryMessage, ProjectEntry};
pub use lightbox::{Lightbox, NavKey};
pub use sequence::ImageSequence;
pub use surface::Surface;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    #[error("an image sequence needs at least one image")]
    EmptySequence,
}
