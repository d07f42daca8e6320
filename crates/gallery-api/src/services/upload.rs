//! Image ingestion: decode, sniff, name, persist.

use gallery_core::{AppError, UploadRequest, UploadResponse};
use gallery_processing::{compose_filename, decode_image_data, sniff_image_format};
use gallery_storage::Storage;
use std::sync::Arc;

use crate::error::HttpAppError;

pub struct ImageUploadService {
    storage: Arc<dyn Storage>,
}

impl ImageUploadService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Store the image carried by `request` and return its access URL.
    ///
    /// `timestamp` (unix seconds) becomes the filename prefix. Every failure
    /// before the write leaves storage untouched. An existing file with the
    /// same derived name is overwritten.
    pub async fn upload(
        &self,
        request: UploadRequest,
        timestamp: i64,
    ) -> Result<UploadResponse, HttpAppError> {
        let data = decode_image_data(&request.image)?;
        let format = sniff_image_format(&data);
        let filename = compose_filename(timestamp, &request.title, format);
        let size = data.len();

        self.storage.write(&filename, data).await.map_err(|e| {
            HttpAppError(AppError::StorageWriteFailure(format!(
                "{} ({})",
                e, filename
            )))
        })?;

        tracing::info!(
            filename = %filename,
            title = %request.title,
            description = %request.description,
            format = %format,
            size_bytes = size,
            "Image uploaded successfully"
        );

        Ok(UploadResponse::for_filename(&filename))
    }
}
