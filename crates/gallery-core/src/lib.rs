//! Gallery Core Library
//!
//! Configuration, the typed error taxonomy, and the wire models shared by the
//! storage, processing, and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{ImageListing, UploadRequest, UploadResponse};
