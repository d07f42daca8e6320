//! Gallery Processing Library
//!
//! The validation and derivation steps of image ingestion: base64 decoding,
//! magic-byte format sniffing, and title-to-filename derivation. All functions
//! are pure; persistence lives in `gallery-storage`.

pub mod decode;
pub mod filename;
pub mod format;

pub use decode::decode_image_data;
pub use filename::{compose_filename, sanitize_title, title_from_filename, title_or_default};
pub use format::{sniff_image_format, ImageFormat};
