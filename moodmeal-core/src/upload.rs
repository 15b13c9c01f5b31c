//! Upload validation for selfie images.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

/// Image formats accepted for mood analysis uploads.
pub const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

/// Maximum upload size (5MB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Validate uploaded image bytes: detect the format from content and check
/// it is allowed. Returns the detected content type (e.g. "image/jpeg").
///
/// Detection works on the leading magic bytes, so a truncated file can pass
/// here; the classifier treats the payload as opaque anyway.
pub fn validate_image(data: &[u8]) -> Result<String, String> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| format!("Failed to read image: {}", e))?;

    let format = reader
        .format()
        .ok_or_else(|| "Could not detect image format".to_string())?;

    if !ALLOWED_FORMATS.contains(&format) {
        return Err(format!(
            "Unsupported image format: {:?}. Allowed: JPEG, PNG, GIF, WebP",
            format
        ));
    }

    Ok(format.to_mime_type().to_string())
}
