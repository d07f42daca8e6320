//! Image listing projected from the storage directory.

use gallery_core::ImageListing;
use gallery_processing::title_from_filename;
use gallery_storage::Storage;
use std::sync::Arc;

use crate::error::HttpAppError;

pub struct ImageListingService {
    storage: Arc<dyn Storage>,
    public_base_url: String,
}

impl ImageListingService {
    pub fn new(storage: Arc<dyn Storage>, public_base_url: impl Into<String>) -> Self {
        Self {
            storage,
            public_base_url: public_base_url.into(),
        }
    }

    /// Re-derive the listing from the directory contents; nothing is cached.
    pub async fn list(&self) -> Result<Vec<ImageListing>, HttpAppError> {
        let entries = self.storage.list().await?;

        let images = entries
            .into_iter()
            .map(|entry| {
                let title = title_from_filename(&entry.name).to_string();
                ImageListing::new(
                    entry.name,
                    entry.size,
                    entry.modified_unix,
                    title,
                    &self.public_base_url,
                )
            })
            .collect::<Vec<_>>();

        tracing::debug!(count = images.len(), "Listed images");

        Ok(images)
    }
}
