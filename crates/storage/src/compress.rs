//! Upload-side image compression.
//!
//! Incoming images are resized to at most 1200px on the longest edge and
//! re-encoded as JPEG, stepping down quality until the result fits in 1 MiB.
//! Inputs that are already within the size budget fall back to a pass-through
//! of the original bytes if re-encoding fails; oversized inputs that cannot
//! be compressed are a hard error.

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::StorageError;

/// Maximum stored image size.
pub const MAX_IMAGE_BYTES: usize = 1024 * 1024;

/// Maximum width or height of a stored image.
pub const MAX_DIMENSION: u32 = 1200;

/// JPEG qualities tried in order until the output fits [`MAX_IMAGE_BYTES`].
const QUALITY_LADDER: &[u8] = &[80, 70, 60, 50, 40];

/// A compressed (or passed-through) image ready for upload.
#[derive(Debug, Clone)]
pub struct CompressedImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Compress raw image bytes for storage.
///
/// - Inputs over 1 MiB must compress successfully or this fails with
///   [`StorageError::Compression`].
/// - Inputs already within the budget are still resized and re-encoded for
///   display speed, but any failure falls back to the original bytes.
pub fn compress_image(bytes: &[u8]) -> Result<CompressedImage, StorageError> {
    let already_small = bytes.len() <= MAX_IMAGE_BYTES;

    match reencode(bytes) {
        Ok(image) => Ok(image),
        Err(err) if already_small => {
            tracing::warn!(error = %err, "Image re-encode failed, storing original bytes");
            Ok(CompressedImage {
                bytes: bytes.to_vec(),
                content_type: sniff_content_type(bytes),
            })
        }
        Err(err) => Err(err),
    }
}

/// Decode, resize to fit [`MAX_DIMENSION`], and JPEG-encode within budget.
fn reencode(bytes: &[u8]) -> Result<CompressedImage, StorageError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| StorageError::Compression(format!("decode: {e}")))?;

    let resized: DynamicImage = if decoded.width().max(decoded.height()) > MAX_DIMENSION {
        // `thumbnail` preserves aspect ratio within the bounding box.
        decoded.thumbnail(MAX_DIMENSION, MAX_DIMENSION)
    } else {
        decoded
    };

    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgb8(resized.to_rgb8());

    for &quality in QUALITY_LADDER {
        let mut buf = Vec::new();
        rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut buf, quality))
            .map_err(|e| StorageError::Compression(format!("encode: {e}")))?;

        if buf.len() <= MAX_IMAGE_BYTES {
            return Ok(CompressedImage {
                bytes: buf,
                content_type: "image/jpeg",
            });
        }
    }

    Err(StorageError::Compression(format!(
        "could not fit image within {MAX_IMAGE_BYTES} bytes"
    )))
}

/// Best-effort content type from magic bytes, for the pass-through path.
fn sniff_content_type(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
