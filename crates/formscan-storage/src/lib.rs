//! Formscan Storage Library
//!
//! Write-only storage gateway: the `Storage` trait, its S3 implementation and
//! the key generator used for uploaded documents and analysis artifacts.
//!
//! # Storage key format
//!
//! - **Source document**: `{millis}-{original_name}`
//! - **Analysis artifact**: `textract-output-{millis}.json`
//!
//! Timestamps come from `KeyGenerator`, which never hands out the same
//! millisecond twice within a process.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::{Clock, FixedClock, KeyGenerator, SystemClock};
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
