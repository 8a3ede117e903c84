//! Object store gateway: the `Storage` trait and its error type.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// The gateway is write-only: objects are created (or overwritten) under a
/// caller-chosen key and never read back through this trait. The analysis
/// service reads them directly from the bucket.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write `data` under `storage_key`, recording `content_type` as object metadata.
    async fn put(&self, storage_key: &str, data: Bytes, content_type: &str) -> StorageResult<()>;

    /// Bucket the objects are written to
    fn bucket(&self) -> &str;
}
