//! Base64 payload decoding.

use base64::{
    alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use gallery_core::AppError;

/// Standard alphabet with required padding. Non-zero trailing bits in the
/// last symbol are ignored instead of rejected.
const IMAGE_DATA_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode the `image` field of an upload.
///
/// An empty field is [`AppError::MissingImageData`]. Line breaks are skipped,
/// so line-wrapped base64 is accepted; anything else the padded standard
/// alphabet rejects is [`AppError::InvalidImageEncoding`].
pub fn decode_image_data(encoded: &str) -> Result<Vec<u8>, AppError> {
    if encoded.is_empty() {
        return Err(AppError::MissingImageData);
    }

    let result = if encoded.contains(['\r', '\n']) {
        IMAGE_DATA_ENGINE.decode(encoded.replace(['\r', '\n'], ""))
    } else {
        IMAGE_DATA_ENGINE.decode(encoded)
    };

    result.map_err(|e| AppError::InvalidImageEncoding(e.to_string()))
}
