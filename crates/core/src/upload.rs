//! Photo upload rules: accepted formats, size limit and storage naming.

use crate::error::CoreError;
use crate::types::DbId;

/// Supported image file extensions.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Default upload size limit (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Public URL prefix under which the upload directory is served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Lowercased extension of `filename`, validated against the supported list.
pub fn image_extension(filename: &str) -> Result<String, CoreError> {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    if !SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(CoreError::Validation(format!(
            "Unsupported image format '.{ext}'. Supported: {}",
            SUPPORTED_IMAGE_EXTENSIONS
                .iter()
                .map(|e| format!(".{e}"))
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }
    Ok(ext)
}

/// Reject empty files and files over `max_bytes`.
pub fn validate_size(len: usize, max_bytes: usize) -> Result<(), CoreError> {
    if len == 0 {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }
    if len > max_bytes {
        return Err(CoreError::Validation(format!(
            "Uploaded file is {len} bytes; the limit is {max_bytes} bytes"
        )));
    }
    Ok(())
}

/// Relative directory (under the upload root) for a place's photos.
pub fn place_dir(place_id: DbId) -> String {
    format!("places/{place_id}")
}

/// Stored file name: `place_{id}_{unix_ts}_{nonce}_{stem}.{ext}` with a sanitized stem.
///
/// `nonce` separates uploads of the same file name within one second.
pub fn stored_filename(
    place_id: DbId,
    original: &str,
    ext: &str,
    unix_ts: i64,
    nonce: &str,
) -> String {
    let stem = original.rsplit_once('.').map_or(original, |(stem, _)| stem);
    // Drop any client-supplied directory components.
    let stem = stem.rsplit(['/', '\\']).next().unwrap_or(stem);
    let mut clean: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    clean.truncate(60);
    let clean = clean.trim_matches('-');
    let clean = if clean.is_empty() { "photo" } else { clean };
    format!("place_{place_id}_{unix_ts}_{nonce}_{clean}.{ext}")
}

/// Public path of a stored photo, as recorded on the media row.
pub fn public_path(place_id: DbId, filename: &str) -> String {
    format!("{UPLOADS_URL_PREFIX}/{}/{filename}", place_dir(place_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_case_insensitive() {
        assert_eq!(image_extension("Citadelle.JPG").unwrap(), "jpg");
        assert_eq!(image_extension("a.b.webp").unwrap(), "webp");
    }

    #[test]
    fn unsupported_extensions_are_rejected() {
        assert!(image_extension("notes.pdf").is_err());
        assert!(image_extension("no_extension").is_err());
        assert!(image_extension("movie.mp4").is_err());
    }

    #[test]
    fn size_limits() {
        assert!(validate_size(0, 100).is_err());
        assert!(validate_size(100, 100).is_ok());
        assert!(validate_size(101, 100).is_err());
    }

    #[test]
    fn stored_filename_is_sanitized() {
        assert_eq!(
            stored_filename(7, "../../etc/Plage Ti Mouillage.png", "png", 1_700_000_000, "a1b2"),
            "place_7_1700000000_a1b2_plage-ti-mouillage.png"
        );
        assert_eq!(stored_filename(7, "???.jpg", "jpg", 1, "x"), "place_7_1_x_photo.jpg");
    }

    #[test]
    fn public_path_is_under_uploads() {
        assert_eq!(public_path(3, "x.png"), "/uploads/places/3/x.png");
    }
}
