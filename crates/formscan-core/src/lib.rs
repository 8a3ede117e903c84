//! Formscan Core Library
//!
//! This crate provides configuration, error types and the models shared by the
//! storage, analysis, API and client crates.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{BaseConfig, Config, ServiceConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{FeatureType, UploadResponse, UploadedFile};
