//! Storage backend setup.

use anyhow::{Context, Result};
use gallery_core::Config;
use gallery_storage::{LocalStorage, Storage};
use std::sync::Arc;

pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = LocalStorage::new(config.uploads_dir())
        .await
        .with_context(|| {
            format!(
                "Failed to initialize uploads directory {}",
                config.uploads_dir().display()
            )
        })?;

    tracing::info!(
        uploads_dir = %config.uploads_dir().display(),
        "Local image storage ready"
    );

    Ok(Arc::new(storage))
}
