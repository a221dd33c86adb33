/// State management module
///
/// This module handles everything the showcase knows before the gallery
/// is built:
/// - The project catalog and its sources (catalog.rs)
/// - Languages and translated strings (i18n.rs)
/// - Start-up configuration (config.rs)

pub mod catalog;
pub mod config;
pub mod i18n;
