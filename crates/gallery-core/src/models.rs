//! Wire models for the upload and listing endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{LISTING_DESCRIPTION, UPLOADS_ROUTE};

/// Upload request body
///
/// Missing fields deserialize as empty strings, so `{}` is a well-formed body
/// that is later rejected for carrying no image.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UploadRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Base64 (standard alphabet, padded) image bytes
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    /// Relative access URL, `/uploads/{filename}`
    pub url: String,
}

impl UploadResponse {
    pub fn for_filename(filename: &str) -> Self {
        Self {
            success: true,
            url: format!("{}/{}", UPLOADS_ROUTE, filename),
        }
    }
}

/// One entry of the image listing, derived from filesystem metadata on every call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImageListing {
    pub name: String,
    pub size: u64,
    /// Modification time, unix seconds
    pub upload_time: i64,
    pub title: String,
    pub description: String,
    pub url: String,
}

impl ImageListing {
    /// Project a stored file into a listing entry.
    ///
    /// `public_base_url` must not carry a trailing slash.
    pub fn new(
        name: String,
        size: u64,
        upload_time: i64,
        title: String,
        public_base_url: &str,
    ) -> Self {
        let url = format!("{}{}/{}", public_base_url, UPLOADS_ROUTE, name);
        Self {
            name,
            size,
            upload_time,
            title,
            description: LISTING_DESCRIPTION.to_string(),
            url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_request_missing_fields_default_to_empty() {
        let req: UploadRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_empty());
        assert!(req.description.is_empty());
        assert!(req.image.is_empty());
    }

    #[test]
    fn test_upload_request_rejects_wrong_types() {
        let result = serde_json::from_str::<UploadRequest>(r#"{"title": 5, "image": "AAAA"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_upload_response_url() {
        let resp = UploadResponse::for_filename("1700000000_cat.png");
        assert!(resp.success);
        assert_eq!(resp.url, "/uploads/1700000000_cat.png");
    }

    #[test]
    fn test_image_listing_shape() {
        let listing = ImageListing::new(
            "1700000000_cat.png".to_string(),
            68,
            1_700_000_000,
            "1700000000_cat".to_string(),
            "http://localhost:5174",
        );
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["name"], "1700000000_cat.png");
        assert_eq!(json["size"], 68);
        assert_eq!(json["upload_time"], 1_700_000_000);
        assert_eq!(json["title"], "1700000000_cat");
        assert_eq!(json["description"], "Uploaded image");
        assert_eq!(
            json["url"],
            "http://localhost:5174/uploads/1700000000_cat.png"
        );
    }
}
