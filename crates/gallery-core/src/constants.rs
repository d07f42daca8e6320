//! Constants shared across the gallery crates.

/// URL path prefix under which stored images are served
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Description reported for every listed image (submitted descriptions are not persisted)
pub const LISTING_DESCRIPTION: &str = "Uploaded image";

/// Stem used when a title sanitizes to nothing
pub const DEFAULT_TITLE: &str = "image";

/// Maximum length, in bytes, of a sanitized title
pub const MAX_TITLE_LEN: usize = 50;
