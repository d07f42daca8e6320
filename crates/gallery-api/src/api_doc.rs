//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use gallery_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gallery API",
        version = "0.1.0",
        description = "Upload base64-encoded images and list what has been stored. Stored files are served under /uploads/."
    ),
    paths(
        handlers::image_upload::upload_image,
        handlers::image_list::list_images,
    ),
    components(schemas(
        models::UploadRequest,
        models::UploadResponse,
        models::ImageListing,
        error::ErrorResponse,
    )),
    tags(
        (name = "images", description = "Image upload and listing")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
