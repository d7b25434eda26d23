/// Gallery interaction state
///
/// Owns the configured image list and everything the view needs to ask:
/// the active category filter, the selected (lightbox) image, and which
/// sources have finished loading. Pure data — no rendering, no I/O — so
/// the whole thing is testable without a UI.

use std::collections::HashSet;

use super::catalog::{derive_categories, ALL_CATEGORY};
use super::data::ImageRecord;

/// Lifecycle of the initial preload pass.
///
/// `NotStarted -> InProgress` on `begin_preload`, `InProgress -> Done`
/// once every requested load has resolved (success or failure). `Done`
/// is terminal: a fresh `Gallery` is required to preload again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloadPhase {
    NotStarted,
    InProgress,
    Done,
}

/// The gallery state controller.
///
/// Constructed once from the injected catalog list; the record list is
/// never mutated afterwards. All operations are total: unknown filters,
/// unknown IDs, and duplicate or late load completions are valid inputs,
/// not errors.
pub struct Gallery {
    /// The fixed image list (catalog order)
    records: Vec<ImageRecord>,
    /// Derived category list, "all" first
    categories: Vec<String>,
    /// Currently active category filter
    active_filter: String,
    /// Index of the image open in the lightbox, if any
    selected: Option<usize>,
    /// Sources confirmed loaded (grows monotonically)
    loaded: HashSet<String>,
    /// Sources of the preload pass still awaiting resolution
    outstanding: HashSet<String>,
    phase: PreloadPhase,
}

impl Gallery {
    /// Create a gallery over the given record list.
    /// Categories are derived once, here.
    pub fn new(records: Vec<ImageRecord>) -> Self {
        let categories = derive_categories(&records);

        Gallery {
            records,
            categories,
            active_filter: ALL_CATEGORY.to_string(),
            selected: None,
            loaded: HashSet::new(),
            outstanding: HashSet::new(),
            phase: PreloadPhase::NotStarted,
        }
    }

    /// The derived category list ("all" always first)
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// Set the active category filter, unconditionally.
    ///
    /// A category matching no record is fine: the filtered view is
    /// simply empty until the filter changes again.
    pub fn set_filter(&mut self, category: impl Into<String>) {
        self.active_filter = category.into();
    }

    /// The records matching the active filter, in catalog order.
    /// The "all" filter matches every record.
    pub fn filtered_images(&self) -> Vec<&ImageRecord> {
        self.records
            .iter()
            .filter(|record| {
                self.active_filter == ALL_CATEGORY || record.category == self.active_filter
            })
            .collect()
    }

    /// Select the image with the given ID (opens the lightbox), or pass
    /// `None` to clear the selection (closes it). An ID not present in
    /// the catalog clears the selection.
    pub fn select_image(&mut self, id: Option<u32>) {
        self.selected = id.and_then(|id| self.records.iter().position(|r| r.id == id));
    }

    /// The record currently open in the lightbox, if any
    pub fn selected_image(&self) -> Option<&ImageRecord> {
        self.selected.and_then(|index| self.records.get(index))
    }

    /// Start the preload pass.
    ///
    /// Returns owned clones of the records to load, for handoff to async
    /// tasks; as each load finishes the caller reports it back through
    /// `resolve_load`. Calling this again on the same instance returns
    /// nothing and changes nothing. An empty catalog completes
    /// immediately.
    pub fn begin_preload(&mut self) -> Vec<ImageRecord> {
        if self.phase != PreloadPhase::NotStarted {
            return Vec::new();
        }

        if self.records.is_empty() {
            self.phase = PreloadPhase::Done;
            return Vec::new();
        }

        self.phase = PreloadPhase::InProgress;
        self.outstanding = self.records.iter().map(|r| r.src.clone()).collect();

        self.records.clone()
    }

    /// Record one completion of the preload pass.
    ///
    /// A successful load adds the source to the loaded set; a failed one
    /// only counts toward completion. Completions for sources that are
    /// not outstanding (duplicates, or arrivals after the pass finished)
    /// are no-ops.
    pub fn resolve_load(&mut self, src: &str, success: bool) {
        if !self.outstanding.remove(src) {
            return;
        }

        if success {
            self.mark_loaded(src);
        }

        if self.outstanding.is_empty() && self.phase == PreloadPhase::InProgress {
            self.phase = PreloadPhase::Done;
        }
    }

    /// Mark a source as loaded, independently of the preload pass.
    /// Idempotent: marking an already-loaded source changes nothing.
    pub fn mark_loaded(&mut self, src: impl Into<String>) {
        self.loaded.insert(src.into());
    }

    /// Whether a source has been confirmed loaded
    pub fn is_loaded(&self, src: &str) -> bool {
        self.loaded.contains(src)
    }

    pub fn phase(&self) -> PreloadPhase {
        self.phase
    }

    /// True exactly while the preload pass is in flight
    pub fn is_preloading(&self) -> bool {
        self.phase == PreloadPhase::InProgress
    }

    /// How many sources have loaded so far (for progress display)
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    /// How many records the gallery holds (for progress display)
    pub fn total_count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, src: &str, category: &str) -> ImageRecord {
        ImageRecord {
            id,
            src: src.to_string(),
            alt_text: format!("Image {}", id),
            category: category.to_string(),
        }
    }

    fn sample_gallery() -> Gallery {
        Gallery::new(vec![
            record(1, "/n1.jpg", "nature"),
            record(2, "/ar1.jpg", "architecture"),
            record(3, "/n2.jpg", "nature"),
            record(4, "/a1.jpg", "animals"),
        ])
    }

    #[test]
    fn test_categories_derived_at_construction() {
        let gallery = sample_gallery();
        assert_eq!(
            gallery.categories(),
            &["all", "nature", "architecture", "animals"]
        );
    }

    #[test]
    fn test_all_filter_returns_everything_in_order() {
        let gallery = sample_gallery();

        assert_eq!(gallery.active_filter(), ALL_CATEGORY);
        let ids: Vec<u32> = gallery.filtered_images().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let mut gallery = sample_gallery();

        gallery.set_filter("nature");
        let ids: Vec<u32> = gallery.filtered_images().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_unknown_filter_yields_empty_not_error() {
        let mut gallery = sample_gallery();

        gallery.set_filter("sunsets");
        assert!(gallery.filtered_images().is_empty());

        gallery.set_filter(ALL_CATEGORY);
        assert_eq!(gallery.filtered_images().len(), 4);
    }

    #[test]
    fn test_filter_switch_scenario() {
        let mut gallery = Gallery::new(vec![
            record(1, "/a.jpg", "x"),
            record(2, "/b.jpg", "y"),
        ]);

        gallery.set_filter("y");
        let ids: Vec<u32> = gallery.filtered_images().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);

        gallery.set_filter("all");
        let ids: Vec<u32> = gallery.filtered_images().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_selection_open_and_close() {
        let mut gallery = sample_gallery();
        assert!(gallery.selected_image().is_none());

        gallery.select_image(Some(2));
        assert_eq!(gallery.selected_image().unwrap().id, 2);

        // Selecting the same image twice is stable
        gallery.select_image(Some(2));
        assert_eq!(gallery.selected_image().unwrap().id, 2);

        gallery.select_image(None);
        assert!(gallery.selected_image().is_none());
    }

    #[test]
    fn test_selecting_unknown_id_clears_selection() {
        let mut gallery = sample_gallery();

        gallery.select_image(Some(1));
        gallery.select_image(Some(999));
        assert!(gallery.selected_image().is_none());
    }

    #[test]
    fn test_mark_loaded_is_idempotent() {
        let mut gallery = sample_gallery();

        gallery.mark_loaded("/n1.jpg");
        gallery.mark_loaded("/n1.jpg");

        assert!(gallery.is_loaded("/n1.jpg"));
        assert!(!gallery.is_loaded("/n2.jpg"));
        assert_eq!(gallery.loaded_count(), 1);
    }

    #[test]
    fn test_preload_pass_with_mixed_outcomes() {
        let mut gallery = sample_gallery();
        assert_eq!(gallery.phase(), PreloadPhase::NotStarted);
        assert!(!gallery.is_preloading());

        let to_load = gallery.begin_preload();
        assert_eq!(to_load.len(), 4);
        assert!(gallery.is_preloading());

        // Completions arrive in arbitrary order; one of them fails
        gallery.resolve_load("/n2.jpg", true);
        gallery.resolve_load("/a1.jpg", false);
        gallery.resolve_load("/n1.jpg", true);
        assert!(gallery.is_preloading());

        gallery.resolve_load("/ar1.jpg", true);

        // The pass completes despite the failure; only successes count
        assert_eq!(gallery.phase(), PreloadPhase::Done);
        assert!(!gallery.is_preloading());
        assert_eq!(gallery.loaded_count(), 3);
        assert!(!gallery.is_loaded("/a1.jpg"));
    }

    #[test]
    fn test_duplicate_and_late_completions_are_noops() {
        let mut gallery = sample_gallery();
        gallery.begin_preload();

        gallery.resolve_load("/n1.jpg", true);
        gallery.resolve_load("/n1.jpg", true);
        assert_eq!(gallery.loaded_count(), 1);

        gallery.resolve_load("/n2.jpg", true);
        gallery.resolve_load("/ar1.jpg", true);
        gallery.resolve_load("/a1.jpg", true);
        assert_eq!(gallery.phase(), PreloadPhase::Done);

        // Arrivals after the pass finished change nothing
        gallery.resolve_load("/n1.jpg", false);
        gallery.resolve_load("/stray.jpg", true);
        assert_eq!(gallery.phase(), PreloadPhase::Done);
        assert_eq!(gallery.loaded_count(), 4);
    }

    #[test]
    fn test_begin_preload_is_one_shot() {
        let mut gallery = sample_gallery();

        assert_eq!(gallery.begin_preload().len(), 4);
        assert!(gallery.begin_preload().is_empty());

        gallery.resolve_load("/n1.jpg", true);
        gallery.resolve_load("/n2.jpg", true);
        gallery.resolve_load("/ar1.jpg", true);
        gallery.resolve_load("/a1.jpg", true);

        // Done is terminal
        assert!(gallery.begin_preload().is_empty());
        assert_eq!(gallery.phase(), PreloadPhase::Done);
    }

    #[test]
    fn test_empty_gallery_preload_completes_immediately() {
        let mut gallery = Gallery::new(Vec::new());

        assert!(gallery.begin_preload().is_empty());
        assert_eq!(gallery.phase(), PreloadPhase::Done);
        assert!(!gallery.is_preloading());
        assert_eq!(gallery.loaded_count(), 0);
        assert_eq!(gallery.total_count(), 0);
    }
}
