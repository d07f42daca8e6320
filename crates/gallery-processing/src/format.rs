//! Image format detection from magic bytes.

use std::fmt;

/// Image formats the gallery recognises
///
/// Anything unrecognised is stored as [`ImageFormat::Jpeg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl ImageFormat {
    /// File extension including the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => ".jpg",
            ImageFormat::Png => ".png",
            ImageFormat::Gif => ".gif",
            ImageFormat::Webp => ".webp",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Webp => "image/webp",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content_type())
    }
}

/// Classify decoded image bytes by their first four bytes.
///
/// Checked in priority order JPEG, PNG, GIF, WEBP. WEBP only matches the RIFF
/// container header; the payload is not inspected. Inputs shorter than four
/// bytes and unmatched prefixes fall back to JPEG.
pub fn sniff_image_format(data: &[u8]) -> ImageFormat {
    let Some(head) = data.get(..4) else {
        tracing::debug!(len = data.len(), "Image data too short to sniff, assuming JPEG");
        return ImageFormat::Jpeg;
    };

    match head {
        [0xFF, 0xD8, _, _] => ImageFormat::Jpeg,
        [0x89, 0x50, 0x4E, 0x47] => ImageFormat::Png,
        [0x47, 0x49, 0x46, _] => ImageFormat::Gif,
        [0x52, 0x49, 0x46, 0x46] => ImageFormat::Webp,
        _ => {
            tracing::debug!(prefix = ?head, "Unrecognised image signature, assuming JPEG");
            ImageFormat::Jpeg
        }
    }
}
