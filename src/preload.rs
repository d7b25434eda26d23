/// Asynchronous image preloading
///
/// Each gallery image is loaded ahead of display by an independent
/// background task: read the file, decode it, convert to RGBA for the
/// renderer. A failed load never aborts the pass — every attempt
/// resolves to a `PreloadOutcome`, and the failure is only logged.

use iced::widget::image::Handle;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a single image
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Result of one preload attempt
#[derive(Debug, Clone)]
pub enum PreloadOutcome {
    /// Image read and decoded; the handle is ready for display
    Loaded { src: String, handle: Handle },
    /// The image could not be loaded; it stays not-loaded for this run
    Failed { src: String, error: String },
}

impl PreloadOutcome {
    /// The source locator this outcome belongs to
    pub fn src(&self) -> &str {
        match self {
            PreloadOutcome::Loaded { src, .. } => src,
            PreloadOutcome::Failed { src, .. } => src,
        }
    }
}

/// Load and decode one gallery image.
///
/// `src` is the opaque catalog locator (kept for bookkeeping), `path`
/// the filesystem location it resolved to. Always resolves; errors are
/// reported inside the returned outcome.
pub async fn load_image(src: String, path: PathBuf) -> PreloadOutcome {
    match try_load(&path).await {
        Ok(handle) => PreloadOutcome::Loaded { src, handle },
        Err(error) => {
            eprintln!("⚠️  Failed to load {}: {}", path.display(), error);
            PreloadOutcome::Failed {
                src,
                error: error.to_string(),
            }
        }
    }
}

/// Fallible inner load: read the file, decode, convert to RGBA
async fn try_load(path: &Path) -> Result<Handle, LoadError> {
    let bytes = tokio::fs::read(path).await?;

    let decoded = image::load_from_memory(&bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[test]
    fn test_load_valid_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let outcome = block_on(load_image("/tiny.png".to_string(), path));

        assert_eq!(outcome.src(), "/tiny.png");
        assert!(matches!(outcome, PreloadOutcome::Loaded { .. }));
    }

    #[test]
    fn test_missing_file_resolves_to_failure() {
        let outcome = block_on(load_image(
            "/nope.jpg".to_string(),
            PathBuf::from("/definitely/not/here.jpg"),
        ));

        match outcome {
            PreloadOutcome::Failed { src, .. } => assert_eq!(src, "/nope.jpg"),
            PreloadOutcome::Loaded { .. } => panic!("expected the load to fail"),
        }
    }

    #[test]
    fn test_undecodable_file_resolves_to_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.jpg");
        std::fs::write(&path, b"not actually a jpeg").unwrap();

        let outcome = block_on(load_image("/garbage.jpg".to_string(), path));

        assert!(matches!(outcome, PreloadOutcome::Failed { .. }));
    }
}
