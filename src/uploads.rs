// ABOUTME: Upload validation and on-disk storage for scanned food images
// ABOUTME: Enforces the image-type allowlist and size cap, generates stored filenames
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Upload handling
//!
//! Validates uploaded images (type allowlist, 10 MB default cap) and stores
//! them under the configured uploads directory. Stored names follow
//! `food-scan-{millis}-{random}-{stem}.{ext}`; the sanitized stem of the
//! original upload keeps the recognition core's keyword scan meaningful on
//! stored filenames.

use chrono::Utc;
use rand::Rng;
use std::path::Path;
use tracing::debug;

use crate::config::environment::UploadConfig;
use crate::errors::{AppError, AppResult};

/// Accepted image extensions and content-type tokens
const ALLOWED_IMAGE_TYPES: [&str; 5] = ["jpeg", "jpg", "png", "gif", "webp"];

/// Descriptor for a stored upload
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// Generated filename under the uploads directory
    pub filename: String,
    /// Size of the stored file in bytes
    pub size_bytes: usize,
}

/// Lowercase extension of a filename, without the dot
fn extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

/// Filename stem reduced to characters safe for a stored name
fn sanitize_stem(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("image");
    stem.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Validate an upload before the analysis core runs.
///
/// # Errors
///
/// Rejects non-image extensions, non-image content types, and files over the
/// configured size cap, all as 400-class validation errors.
pub fn validate(
    original_name: &str,
    content_type: Option<&str>,
    size_bytes: usize,
    max_size_bytes: usize,
) -> AppResult<()> {
    let ext = extension(original_name).unwrap_or_default();
    let ext_allowed = ALLOWED_IMAGE_TYPES.contains(&ext.as_str());
    let type_allowed = content_type
        .map(|ct| ALLOWED_IMAGE_TYPES.iter().any(|t| ct.contains(t)))
        .unwrap_or(false);

    if !ext_allowed || !type_allowed {
        return Err(AppError::invalid_input(
            "Only image files are allowed (jpeg, jpg, png, gif, webp)",
        ));
    }

    if size_bytes > max_size_bytes {
        return Err(AppError::invalid_input(format!(
            "Image exceeds the maximum upload size of {max_size_bytes} bytes"
        )));
    }

    Ok(())
}

/// Generate the stored filename for an upload
fn generate_filename(original_name: &str, rng: &mut impl Rng) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u32 = rng.gen_range(0..1_000_000_000);
    let stem = sanitize_stem(original_name);
    let ext = extension(original_name).unwrap_or_else(|| "jpg".to_string());
    format!("food-scan-{millis}-{suffix}-{stem}.{ext}")
}

/// Validate and store one uploaded image under the uploads directory.
///
/// # Errors
///
/// Returns a validation error for rejected uploads or a storage error when
/// the filesystem write fails.
pub async fn store(
    config: &UploadConfig,
    original_name: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> AppResult<StoredImage> {
    validate(original_name, content_type, bytes.len(), config.max_size_bytes)?;

    tokio::fs::create_dir_all(&config.dir)
        .await
        .map_err(|e| AppError::storage(format!("Failed to create uploads dir: {e}")))?;

    let filename = generate_filename(original_name, &mut rand::thread_rng());
    let path = config.dir.join(&filename);
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| AppError::storage(format!("Failed to store upload: {e}")))?;

    debug!("Stored upload {} ({} bytes)", filename, bytes.len());

    Ok(StoredImage {
        filename,
        size_bytes: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::path::PathBuf;

    const TEN_MB: usize = 10 * 1024 * 1024;

    #[test]
    fn test_validate_accepts_images() {
        assert!(validate("lunch.jpg", Some("image/jpeg"), 1024, TEN_MB).is_ok());
        assert!(validate("Dinner.PNG", Some("image/png"), 1024, TEN_MB).is_ok());
        assert!(validate("snack.webp", Some("image/webp"), 1024, TEN_MB).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_type() {
        assert!(validate("notes.txt", Some("text/plain"), 10, TEN_MB).is_err());
        // Good extension but wrong content type
        assert!(validate("fake.jpg", Some("application/pdf"), 10, TEN_MB).is_err());
        // Missing content type
        assert!(validate("lunch.jpg", None, 10, TEN_MB).is_err());
        // No extension at all
        assert!(validate("lunch", Some("image/jpeg"), 10, TEN_MB).is_err());
    }

    #[test]
    fn test_validate_rejects_oversize() {
        assert!(validate("big.jpg", Some("image/jpeg"), TEN_MB + 1, TEN_MB).is_err());
        assert!(validate("ok.jpg", Some("image/jpeg"), TEN_MB, TEN_MB).is_ok());
    }

    #[test]
    fn test_sanitize_stem() {
        assert_eq!(sanitize_stem("My Lunch Pic!.jpg"), "my-lunch-pic-");
        assert_eq!(sanitize_stem("chicken_breast.png"), "chicken_breast");
    }

    #[tokio::test]
    async fn test_store_writes_file_with_generated_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = UploadConfig {
            dir: PathBuf::from(dir.path()),
            max_size_bytes: TEN_MB,
        };

        let stored = store(&config, "chicken.jpg", Some("image/jpeg"), b"fakeimage")
            .await
            .unwrap();

        assert!(stored.filename.starts_with("food-scan-"));
        assert!(stored.filename.ends_with("-chicken.jpg"));
        assert_eq!(stored.size_bytes, 9);
        assert!(dir.path().join(&stored.filename).exists());
    }
}
