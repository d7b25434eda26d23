/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog layer and the UI layer.

use serde::{Deserialize, Serialize};

/// Represents a single image in the gallery catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Unique catalog ID
    pub id: u32,
    /// Opaque source locator, resolved against the catalog root
    /// (e.g., "nature/n1.jpg" or the legacy "/n1.jpg" form)
    pub src: String,
    /// Human-readable label shown in captions
    pub alt_text: String,
    /// Category label used for filtering (e.g., "nature")
    pub category: String,
}
