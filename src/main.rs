use iced::widget::{button, column, container, horizontal_space, progress_bar, row, scrollable, text};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::collections::HashMap;
use std::path::PathBuf;

// Application modules
mod preload;
mod state;
mod ui;

use preload::PreloadOutcome;
use state::catalog::{self, Catalog};
use state::gallery::{Gallery, PreloadPhase};

/// Main application state
struct GalleryApp {
    /// The loaded catalog (image records + the folder they resolve against)
    catalog: Catalog,
    /// Interaction state for the current catalog: filter, selection,
    /// loaded-set, preload progress
    gallery: Gallery,
    /// Decoded image handles, keyed by source locator
    handles: HashMap<String, iced::widget::image::Handle>,
    /// ID of the current preload pass. Completions carry the ID of the
    /// pass they belong to; anything from a superseded pass is dropped.
    pass: u64,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User picked a category in the filter bar
    FilterSelected(String),
    /// User clicked a grid card
    ImageClicked(u32),
    /// User dismissed the lightbox
    CloseLightbox,
    /// User clicked the "Open Folder" button
    OpenFolder,
    /// One preload attempt resolved (pass ID + outcome)
    ImageResolved(u64, PreloadOutcome),
}

impl GalleryApp {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let catalog = startup_catalog();
        let mut gallery = Gallery::new(catalog.records().to_vec());

        println!("🖼️  Image gallery initialized with {} images", catalog.len());

        let status = if catalog.is_empty() {
            "No catalog loaded. Open a folder to build one.".to_string()
        } else {
            format!(
                "Ready. {} images in {} categories.",
                catalog.len(),
                gallery.categories().len() - 1
            )
        };

        let pass = 1;
        let task = preload_task(&mut gallery, &catalog, pass);

        (
            GalleryApp {
                catalog,
                gallery,
                handles: HashMap::new(),
                pass,
                status,
            },
            task,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FilterSelected(category) => {
                self.gallery.set_filter(category);
                Task::none()
            }
            Message::ImageClicked(id) => {
                self.gallery.select_image(Some(id));
                Task::none()
            }
            Message::CloseLightbox => {
                self.gallery.select_image(None);
                Task::none()
            }
            Message::OpenFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Folder with Images")
                    .pick_folder();

                let Some(folder_path) = folder else {
                    return Task::none();
                };

                // A new catalog means a fresh gallery instance: new
                // loaded-set, new preload pass. In-flight completions
                // from the old pass carry a stale pass ID and get dropped.
                let catalog = Catalog::scan_folder(&folder_path);
                if let Err(e) = catalog.save(&catalog::default_catalog_path()) {
                    eprintln!("⚠️  Could not save catalog: {}", e);
                }

                self.gallery = Gallery::new(catalog.records().to_vec());
                self.handles.clear();
                self.catalog = catalog;
                self.pass += 1;
                self.status = format!(
                    "Opened {} ({} images).",
                    folder_path.display(),
                    self.catalog.len()
                );

                preload_task(&mut self.gallery, &self.catalog, self.pass)
            }
            Message::ImageResolved(pass, outcome) => {
                if pass != self.pass {
                    // The gallery instance this load was started for is gone
                    return Task::none();
                }

                match outcome {
                    PreloadOutcome::Loaded { src, handle } => {
                        self.handles.insert(src.clone(), handle);
                        self.gallery.resolve_load(&src, true);
                    }
                    PreloadOutcome::Failed { src, .. } => {
                        self.gallery.resolve_load(&src, false);
                    }
                }

                if self.gallery.phase() == PreloadPhase::Done {
                    self.status = format!(
                        "✅ Preload complete: {} of {} images loaded.",
                        self.gallery.loaded_count(),
                        self.gallery.total_count()
                    );
                }

                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let toolbar = row![
            button("Open Folder").on_press(Message::OpenFolder).padding(10),
            text(&self.status).size(14),
            horizontal_space(),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        let mut page = column![
            text("Image Gallery").size(32),
            toolbar,
            ui::filter_bar::filter_bar(self.gallery.categories(), self.gallery.active_filter()),
        ]
        .spacing(16)
        .padding(24);

        if self.gallery.is_preloading() {
            page = page.push(
                row![
                    progress_bar(
                        0.0..=self.gallery.total_count() as f32,
                        self.gallery.loaded_count() as f32,
                    )
                    .height(8.0),
                    text(format!(
                        "{} / {}",
                        self.gallery.loaded_count(),
                        self.gallery.total_count()
                    ))
                    .size(12),
                ]
                .spacing(12)
                .align_y(Alignment::Center),
            );
        }

        page = page.push(
            scrollable(ui::grid::image_grid(&self.gallery, &self.handles)).height(Length::Fill),
        );

        let base: Element<Message> = container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        // Modal for the enlarged image
        match self.gallery.selected_image() {
            Some(record) => ui::lightbox::lightbox_over(base, record, self.handles.get(&record.src)),
            None => base,
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Image Gallery", GalleryApp::update, GalleryApp::view)
        .theme(GalleryApp::theme)
        .centered()
        .run_with(GalleryApp::new)
}

/// Resolve the catalog to show at startup
///
/// Priority: a path given on the command line (a catalog JSON file or a
/// folder to scan), then the saved default catalog, then an empty
/// gallery with a hint in the status line.
fn startup_catalog() -> Catalog {
    if let Some(arg) = std::env::args().nth(1) {
        let path = PathBuf::from(arg);

        if path.is_dir() {
            return Catalog::scan_folder(&path);
        }

        match Catalog::load(&path) {
            Ok(catalog) => return catalog,
            Err(e) => eprintln!("⚠️  Could not load catalog {}: {}", path.display(), e),
        }
    }

    let default_path = catalog::default_catalog_path();
    if default_path.exists() {
        match Catalog::load(&default_path) {
            Ok(catalog) => return catalog,
            Err(e) => eprintln!(
                "⚠️  Could not load catalog {}: {}",
                default_path.display(),
                e
            ),
        }
    }

    Catalog::empty()
}

/// Fan out one background load task per record of a fresh preload pass
fn preload_task(gallery: &mut Gallery, catalog: &Catalog, pass: u64) -> Task<Message> {
    let records = gallery.begin_preload();
    if records.is_empty() {
        return Task::none();
    }

    println!("⏳ Preloading {} images…", records.len());

    Task::batch(records.into_iter().map(|record| {
        let path = catalog.resolve(&record.src);
        Task::perform(preload::load_image(record.src, path), move |outcome| {
            Message::ImageResolved(pass, outcome)
        })
    }))
}
