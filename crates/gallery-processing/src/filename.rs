//! Title sanitization and stored-filename derivation.
//!
//! Stored files are named `{unix_timestamp}_{sanitized_title}{ext}`. Nothing
//! checks for an existing file first, so two uploads with the same title in the
//! same second resolve to the same name and the later write wins.

use gallery_core::constants::{DEFAULT_TITLE, MAX_TITLE_LEN};

use crate::format::ImageFormat;

/// Replace filesystem-unsafe characters and bound the length.
///
/// Spaces become `_`; `/ \ : * ? " < > |` become `-`. Every other character,
/// control and non-ASCII characters included, is kept. The result is cut to at
/// most [`MAX_TITLE_LEN`] bytes, never splitting a UTF-8 sequence. May return
/// an empty string; see [`title_or_default`].
pub fn sanitize_title(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| match c {
            ' ' => '_',
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            other => other,
        })
        .collect();

    truncate_to_char_boundary(replaced, MAX_TITLE_LEN)
}

/// Sanitize a title, substituting `image` when nothing is left.
pub fn title_or_default(title: &str) -> String {
    let sanitized = sanitize_title(title);
    if sanitized.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        sanitized
    }
}

/// Compose the stored filename for an upload.
pub fn compose_filename(timestamp: i64, title: &str, format: ImageFormat) -> String {
    format!(
        "{}_{}{}",
        timestamp,
        title_or_default(title),
        format.extension()
    )
}

/// Strip the final extension (from the last `.` on) from a stored filename.
pub fn title_from_filename(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) => &filename[..idx],
        None => filename,
    }
}

fn truncate_to_char_boundary(mut s: String, max_len: usize) -> String {
    if s.len() > max_len {
        let mut end = max_len;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        s.truncate(end);
    }
    s
}
