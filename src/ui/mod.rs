/// Views for the showcase page
///
/// This module handles:
/// - Greeting, bio and services above the projects (profile.rs)
/// - Project cards (project.rs)
/// - The inline carousel (carousel.rs)
/// - The lightbox overlay (lightbox.rs)
/// - Slide rendering shared by both (slide.rs)

pub mod carousel;
pub mod lightbox;
pub mod profile;
pub mod project;
pub mod slide;
