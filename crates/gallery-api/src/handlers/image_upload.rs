use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;
use gallery_core::{UploadRequest, UploadResponse};

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::services::ImageUploadService;
use crate::state::AppState;

/// Upload image handler
///
/// Accepts a JSON body with a base64 image, stores it as
/// `{unix_timestamp}_{sanitized_title}{ext}` and returns its relative URL.
///
/// # Errors
/// - `AppError::InvalidRequestBody` - Body is not a JSON object of the expected shape
/// - `AppError::MissingImageData` - `image` is empty
/// - `AppError::InvalidImageEncoding` - `image` is not valid base64
/// - `AppError::StorageWriteFailure` - The file could not be written
#[utoipa::path(
    post,
    path = "/upload",
    tag = "images",
    request_body(content = UploadRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Image uploaded successfully", body = UploadResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 500, description = "Failed to save image", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all, fields(operation = "upload_image"))]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<UploadRequest>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let service = ImageUploadService::new(state.storage.clone());
    let response = service.upload(payload, Utc::now().timestamp()).await?;
    Ok(Json(response))
}
