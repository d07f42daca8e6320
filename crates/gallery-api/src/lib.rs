//! Gallery API Library
//!
//! HTTP handlers, error rendering, and application setup for the image
//! gallery backend.

mod api_doc;
mod handlers;
mod services;

pub mod error;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
