#[cfg(feature = "storage-s3")]
use crate::S3Storage;
use crate::{Storage, StorageResult};
use formscan_core::Config;
use std::sync::Arc;

/// Create the storage backend described by the configuration
#[cfg(feature = "storage-s3")]
pub fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let storage = S3Storage::new(
        config.s3_bucket().to_string(),
        config.aws_region().to_string(),
        config.aws_access_key_id().to_string(),
        config.aws_secret_access_key().to_string(),
        config.s3_endpoint().map(String::from),
    )?;

    tracing::info!(
        bucket = %config.s3_bucket(),
        region = %config.aws_region(),
        endpoint = config.s3_endpoint().unwrap_or("aws"),
        "S3 storage configured"
    );

    Ok(Arc::new(storage))
}

#[cfg(not(feature = "storage-s3"))]
pub fn create_storage(_config: &Config) -> StorageResult<Arc<dyn Storage>> {
    Err(crate::StorageError::ConfigError(
        "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
    ))
}
