use std::sync::Arc;

use axum::{extract::State, Json};
use gallery_core::ImageListing;

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::ImageListingService;
use crate::state::AppState;

/// List every stored image, in filename order
#[utoipa::path(
    get,
    path = "/api/images",
    tag = "images",
    responses(
        (status = 200, description = "Stored images (empty array when none)", body = Vec<ImageListing>),
        (status = 500, description = "Failed to read uploads directory", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all, fields(operation = "list_images"))]
pub async fn list_images(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ImageListing>>, HttpAppError> {
    let service =
        ImageListingService::new(state.storage.clone(), state.config.public_base_url.clone());
    let images = service.list().await?;
    Ok(Json(images))
}
