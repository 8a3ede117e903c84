use async_trait::async_trait;
use formscan_core::FeatureType;
use thiserror::Error;

/// Raw analysis output. No schema is enforced on it.
pub type AnalysisPayload = serde_json::Value;

/// Document analysis errors
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid analysis request: {0}")]
    InvalidRequest(String),

    /// Failure reported by (or while reaching) the analysis service
    #[error("{0}")]
    ServiceError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Document analysis abstraction
///
/// Implementations extract structured content (tables, form fields) from an
/// object that has already been written to `bucket`/`key`.
#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        bucket: &str,
        key: &str,
        features: &[FeatureType],
    ) -> AnalysisResult<AnalysisPayload>;

    /// Service name used in logs
    fn name(&self) -> &'static str;
}

/// Shared request checks run before any remote call.
pub fn validate_request(bucket: &str, key: &str, features: &[FeatureType]) -> AnalysisResult<()> {
    if bucket.is_empty() || key.is_empty() {
        return Err(AnalysisError::InvalidRequest(
            "bucket and key must not be empty".to_string(),
        ));
    }
    if features.is_empty() {
        return Err(AnalysisError::InvalidRequest(
            "at least one feature type is required".to_string(),
        ));
    }
    Ok(())
}
