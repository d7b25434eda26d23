/// State management module
///
/// This module handles all application state, including:
/// - The image catalog and category derivation (catalog.rs)
/// - Shared data structures (data.rs)
/// - Filter/selection/preload tracking (gallery.rs)

pub mod catalog;
pub mod data;
pub mod gallery;
