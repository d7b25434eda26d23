/// The image catalog: the configured list of gallery images
///
/// The catalog is plain JSON configuration, injected into the gallery
/// state at startup. It can be written by hand, or generated by scanning
/// a folder of images (category = parent directory name).

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::data::ImageRecord;

/// Synthetic category label that matches every record.
/// Always the first entry of the derived category list.
pub const ALL_CATEGORY: &str = "all";

/// File extensions recognized as gallery images (lowercase)
const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff"];

/// Derive the ordered list of distinct categories from a record list.
///
/// Returns `["all"]` followed by each category in first-seen order,
/// duplicate-free. An empty record list yields `["all"]` alone.
pub fn derive_categories(records: &[ImageRecord]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORY.to_string()];

    for record in records {
        if !categories.contains(&record.category) {
            categories.push(record.category.clone());
        }
    }

    categories
}

/// Errors that can occur while reading or writing a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk representation of a catalog (JSON)
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    /// When this file was generated (RFC 3339), if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
    /// Folder that image sources resolve against.
    /// Falls back to the catalog file's own directory when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    root: Option<PathBuf>,
    /// The configured image records
    images: Vec<ImageRecord>,
}

/// The loaded catalog: the fixed image list plus the folder
/// its source locators resolve against
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
    records: Vec<ImageRecord>,
}

impl Catalog {
    /// Create a catalog from an already-built record list
    pub fn new(root: PathBuf, records: Vec<ImageRecord>) -> Self {
        Catalog { root, records }
    }

    /// Create an empty catalog rooted at the current directory
    pub fn empty() -> Self {
        Catalog {
            root: PathBuf::from("."),
            records: Vec::new(),
        }
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&json)?;

        // Sources resolve against the recorded root, or the file's own folder
        let root = file.root.unwrap_or_else(|| {
            path.parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."))
        });

        Ok(Catalog {
            root,
            records: file.images,
        })
    }

    /// Save the catalog to a JSON file, stamping the generation time
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = CatalogFile {
            generated_at: Some(Utc::now().to_rfc3339()),
            root: Some(self.root.clone()),
            images: self.records.clone(),
        };

        fs::write(path, serde_json::to_string_pretty(&file)?)?;
        println!("💾 Catalog saved: {}", path.display());

        Ok(())
    }

    /// Build a catalog by scanning a folder of images.
    ///
    /// Walks the folder recursively, keeping files with a known image
    /// extension. The category of each image is the name of its parent
    /// directory ("uncategorized" for files directly in the root).
    /// Entries are visited in sorted order so IDs are deterministic.
    pub fn scan_folder(root: &Path) -> Self {
        let mut records = Vec::new();
        let mut next_id: u32 = 1;

        for entry in WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            // Only process files (not directories)
            if !path.is_file() {
                continue;
            }

            // Check for a known image extension
            let Some(extension) = path.extension() else {
                continue;
            };
            let ext = extension.to_string_lossy().to_lowercase();
            if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
                continue;
            }

            // Source locator relative to the scan root
            let src = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");

            // Category from the parent directory name
            let category = path
                .parent()
                .filter(|parent| *parent != root)
                .and_then(|parent| parent.file_name())
                .map(|name| name.to_string_lossy().to_lowercase())
                .unwrap_or_else(|| "uncategorized".to_string());

            let alt_text = path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();

            records.push(ImageRecord {
                id: next_id,
                src,
                alt_text,
                category,
            });
            next_id += 1;
        }

        println!("🔍 Scanned {}: {} images found", root.display(), records.len());

        Catalog {
            root: root.to_path_buf(),
            records,
        }
    }

    /// The configured image records, in catalog order
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// The folder that source locators resolve against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an opaque source locator to a filesystem path.
    /// Tolerates the legacy leading-slash form ("/n1.jpg").
    pub fn resolve(&self, src: &str) -> PathBuf {
        self.root.join(src.trim_start_matches('/'))
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Get the path where the catalog is stored by default
///
/// - Linux: ~/.config/image-gallery/gallery.json
/// - macOS: ~/Library/Application Support/image-gallery/gallery.json
/// - Windows: %APPDATA%\image-gallery\gallery.json
pub fn default_catalog_path() -> PathBuf {
    let mut path = dirs::config_dir()
        .or_else(|| dirs::home_dir())
        .expect("Could not determine user config directory");

    path.push("image-gallery");
    path.push("gallery.json");
    path
}
