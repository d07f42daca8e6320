//! Error types module
//!
//! All failures the gallery can report to a client are unified under [`AppError`].
//! Each variant self-describes its HTTP presentation through [`ErrorMetadata`];
//! the `String` payloads carry server-side detail that is logged but never sent
//! back to the client.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "MISSING_IMAGE_DATA")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Client-facing message (the reason string that goes on the wire)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    #[error("Image data is required")]
    MissingImageData,

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    #[error("Invalid base64 image data: {0}")]
    InvalidImageEncoding(String),

    #[error("Failed to save image: {0}")]
    StorageWriteFailure(String),

    #[error("Failed to read uploads directory: {0}")]
    DirectoryReadFailure(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidRequestBody(err.to_string())
    }
}

/// Static metadata for each variant: (http_status, error_code, client_message, recoverable, log_level).
fn app_error_static_metadata(
    err: &AppError,
) -> (u16, &'static str, &'static str, bool, LogLevel) {
    match err {
        AppError::InvalidRequestBody(_) => (
            400,
            "INVALID_REQUEST_BODY",
            "Invalid request body",
            false,
            LogLevel::Debug,
        ),
        AppError::MissingImageData => (
            400,
            "MISSING_IMAGE_DATA",
            "Image data is required",
            false,
            LogLevel::Debug,
        ),
        AppError::PayloadTooLarge(_) => (
            413,
            "PAYLOAD_TOO_LARGE",
            "Request body too large",
            false,
            LogLevel::Debug,
        ),
        AppError::InvalidImageEncoding(_) => (
            400,
            "INVALID_IMAGE_ENCODING",
            "Invalid base64 image data",
            false,
            LogLevel::Debug,
        ),
        AppError::StorageWriteFailure(_) => (
            500,
            "STORAGE_WRITE_FAILURE",
            "Failed to save image",
            true,
            LogLevel::Error,
        ),
        AppError::DirectoryReadFailure(_) => (
            500,
            "DIRECTORY_READ_FAILURE",
            "Failed to read uploads directory",
            true,
            LogLevel::Error,
        ),
    }
}

impl AppError {
    /// Get the error type name for log records
    pub fn error_type(&self) -> &str {
        match self {
            AppError::InvalidRequestBody(_) => "InvalidRequestBody",
            AppError::MissingImageData => "MissingImageData",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::InvalidImageEncoding(_) => "InvalidImageEncoding",
            AppError::StorageWriteFailure(_) => "StorageWriteFailure",
            AppError::DirectoryReadFailure(_) => "DirectoryReadFailure",
        }
    }

    /// Whether the failure was caused by the client's input rather than a server resource
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.http_status_code())
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();
        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }
        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn client_message(&self) -> String {
        app_error_static_metadata(self).2.to_string()
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).3
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_400() {
        let errors = [
            AppError::InvalidRequestBody("expected value".to_string()),
            AppError::MissingImageData,
            AppError::InvalidImageEncoding("Invalid byte 37, offset 0.".to_string()),
        ];
        for err in errors {
            assert_eq!(err.http_status_code(), 400);
            assert!(err.is_client_error());
            assert!(!err.is_recoverable());
            assert_eq!(err.log_level(), LogLevel::Debug);
        }
    }

    #[test]
    fn test_payload_too_large_is_413() {
        let err = AppError::PayloadTooLarge("length limit exceeded".to_string());
        assert_eq!(err.http_status_code(), 413);
        assert!(err.is_client_error());
        assert_eq!(err.client_message(), "Request body too large");
    }

    #[test]
    fn test_resource_errors_are_500_and_recoverable() {
        let errors = [
            AppError::StorageWriteFailure("permission denied".to_string()),
            AppError::DirectoryReadFailure("no such directory".to_string()),
        ];
        for err in errors {
            assert_eq!(err.http_status_code(), 500);
            assert!(!err.is_client_error());
            assert!(err.is_recoverable());
            assert_eq!(err.log_level(), LogLevel::Error);
        }
    }

    #[test]
    fn test_client_message_hides_detail() {
        let err = AppError::StorageWriteFailure("/srv/uploads: disk full".to_string());
        assert_eq!(err.client_message(), "Failed to save image");
        assert!(err.detailed_message().contains("disk full"));

        let err = AppError::DirectoryReadFailure("/srv/uploads: EACCES".to_string());
        assert_eq!(err.client_message(), "Failed to read uploads directory");
    }

    #[test]
    fn test_wire_reason_strings() {
        assert_eq!(
            AppError::InvalidRequestBody(String::new()).client_message(),
            "Invalid request body"
        );
        assert_eq!(
            AppError::MissingImageData.client_message(),
            "Image data is required"
        );
        assert_eq!(
            AppError::InvalidImageEncoding(String::new()).client_message(),
            "Invalid base64 image data"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::InvalidRequestBody(_)));
        assert_eq!(err.error_code(), "INVALID_REQUEST_BODY");
    }
}
