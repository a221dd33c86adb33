/// Slide image loader
///
/// Reads and decodes an image file into RGBA pixels and wraps them in an
/// iced image handle, so rendering never decodes on the UI thread.

use iced::widget::image::Handle;
use std::path::Path;
use tokio::task;

/// A decoded image ready for display
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("remote images are not supported: {0}")]
    Remote(String),
    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },
    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("task join error: {0}")]
    Join(String),
}

/// Load and decode one image reference
///
/// Decoding is CPU-bound, so it runs on the blocking pool.
pub async fn load_image(reference: String) -> Result<LoadedImage, LoadError> {
    task::spawn_blocking(move || load_image_blocking(&reference))
        .await
        .map_err(|e| LoadError::Join(e.to_string()))?
}

fn load_image_blocking(reference: &str) -> Result<LoadedImage, LoadError> {
    if reference.contains("://") {
        return Err(LoadError::Remote(reference.to_string()));
    }

    let path = Path::new(reference);
    if !path.exists() {
        return Err(LoadError::NotFound(reference.to_string()));
    }

    let bytes = std::fs::read(path).map_err(|e| LoadError::Read {
        path: reference.to_string(),
        reason: e.to_string(),
    })?;

    let decoded = image::load_from_memory(&bytes).map_err(|e| LoadError::Decode {
        path: reference.to_string(),
        reason: e.to_string(),
    })?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    log::debug!("Decoded {} ({}x{})", reference, width, height);

    Ok(LoadedImage {
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}
