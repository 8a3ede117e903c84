use crate::{AnalysisResult, DocumentAnalyzer};
use formscan_core::Config;
use std::sync::Arc;

/// Create the document analyzer described by the configuration
#[cfg(feature = "analysis-textract")]
pub async fn create_analyzer(config: &Config) -> AnalysisResult<Arc<dyn DocumentAnalyzer>> {
    let analyzer = crate::TextractAnalyzer::new(
        config.aws_region(),
        config.aws_access_key_id(),
        config.aws_secret_access_key(),
    )
    .await;

    tracing::info!(region = %config.aws_region(), "Textract analyzer configured");

    Ok(Arc::new(analyzer))
}

#[cfg(not(feature = "analysis-textract"))]
pub async fn create_analyzer(_config: &Config) -> AnalysisResult<Arc<dyn DocumentAnalyzer>> {
    Err(crate::AnalysisError::ConfigError(
        "Textract analyzer not available (analysis-textract feature not enabled)".to_string(),
    ))
}
