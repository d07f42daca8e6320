//! Gallery Storage Library
//!
//! Storage abstraction for uploaded images and its local filesystem
//! implementation.
//!
//! # Storage layout
//!
//! A single flat directory. Keys are filenames: non-empty, never `.` or `..`,
//! and free of path separators.

pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult, StoredEntry};
