/// User interface building blocks
///
/// This module contains the view helpers composed by the main view:
/// - Category filter button row (filter_bar.rs)
/// - Wrapped image grid with loading placeholders (grid.rs)
/// - Modal overlay for the enlarged image (lightbox.rs)

pub mod filter_bar;
pub mod grid;
pub mod lightbox;
