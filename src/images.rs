// src/images.rs
//! Shop image storage.
//!
//! Uploaded images are decoded, shrunk to a bounded thumbnail and re-encoded
//! as JPG under the per-shop image directory.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use uuid::Uuid;

use crate::error::AppError;

/// Maximum accepted upload size (5MB)
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// Thumbnail bounding box
const THUMB_WIDTH: u32 = 200;
const THUMB_HEIGHT: u32 = 200;

/// JPEG quality for stored shop images
const JPEG_QUALITY: u8 = 85;

/// An uploaded image, consumed once to produce a stored file path.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Filesystem side effects for shop images. Seam for tests.
pub trait ImageStore: Send + Sync {
    /// Process `img` into a thumbnail stored under `dest_dir`; returns the
    /// stored file path.
    fn generate_thumbnail(&self, img: &ImageUpload, dest_dir: &Path) -> Result<String, AppError>;

    /// Best-effort removal of an old image file or directory. Never fails the
    /// caller; problems are logged.
    fn delete_file_or_path(&self, path: &str);
}

#[derive(Clone, Default)]
pub struct LocalImageStore;

impl ImageStore for LocalImageStore {
    fn generate_thumbnail(&self, img: &ImageUpload, dest_dir: &Path) -> Result<String, AppError> {
        let decoded = image::load_from_memory(&img.bytes)
            .map_err(|e| AppError::validation(format!("Invalid image file ({}): {}", img.file_name, e)))?;
        let thumb = decoded.thumbnail(THUMB_WIDTH, THUMB_HEIGHT);

        let mut buffer = Vec::new();
        {
            let mut cursor = Cursor::new(&mut buffer);
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
            thumb
                .to_rgb8()
                .write_with_encoder(encoder)
                .map_err(|e| AppError::shop_op(format!("Failed to encode shop image: {}", e)))?;
        }

        fs::create_dir_all(dest_dir)
            .map_err(|e| AppError::shop_op(format!("Failed to create image dir: {}", e)))?;
        let dest = dest_dir.join(format!("{}.jpg", Uuid::new_v4()));
        fs::write(&dest, &buffer)
            .map_err(|e| AppError::shop_op(format!("Failed to write shop image: {}", e)))?;

        Ok(dest.to_string_lossy().into_owned())
    }

    fn delete_file_or_path(&self, path: &str) {
        let target = Path::new(path);
        if !target.exists() {
            return;
        }
        let res = if target.is_dir() {
            fs::remove_dir_all(target)
        } else {
            fs::remove_file(target)
        };
        if let Err(e) = res {
            tracing::warn!(path, error=%e, "Failed to delete old shop image");
        }
    }
}
