//! Upload pipeline: store the source document, analyze it, store the result.
//!
//! Steps run strictly in order and the first failure ends the request.
//! Nothing is rolled back: a stored source document stays in the bucket even
//! when analysis or the artifact write fails.

use bytes::Bytes;
use formscan_analysis::{AnalysisError, AnalysisPayload};
use formscan_core::{FeatureType, UploadResponse, UploadedFile};
use formscan_storage::StorageError;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::state::AppState;

pub const ANALYSIS_CONTENT_TYPE: &str = "application/json";

/// Pipeline step, used to label logs and errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    StoreSource,
    Analyze,
    StoreResult,
}

impl Display for UploadStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            UploadStage::StoreSource => "store_source",
            UploadStage::Analyze => "analyze",
            UploadStage::StoreResult => "store_result",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("{source}")]
    Storage {
        stage: UploadStage,
        #[source]
        source: StorageError,
    },

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Failed to serialize analysis result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl UploadError {
    pub fn stage(&self) -> UploadStage {
        match self {
            UploadError::Storage { stage, .. } => *stage,
            UploadError::Analysis(_) => UploadStage::Analyze,
            UploadError::Serialize(_) => UploadStage::StoreResult,
        }
    }
}

/// Runs the upload pipeline against the gateways held in `AppState`.
pub struct UploadService<'a> {
    state: &'a AppState,
}

impl<'a> UploadService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn process(&self, file: UploadedFile) -> Result<UploadResponse, UploadError> {
        let result = self.run(file).await;
        if let Err(ref e) = result {
            tracing::error!(
                error = %e,
                stage = %e.stage(),
                "Error processing file"
            );
        }
        result
    }

    async fn run(&self, file: UploadedFile) -> Result<UploadResponse, UploadError> {
        let storage = &self.state.storage;

        let source_key = self.state.keys.source_key(&file.original_name);
        storage
            .put(&source_key, file.data.clone(), &file.content_type)
            .await
            .map_err(|source| UploadError::Storage {
                stage: UploadStage::StoreSource,
                source,
            })?;

        tracing::debug!(
            key = %source_key,
            original_name = %file.original_name,
            content_type = %file.content_type,
            size_bytes = file.size(),
            "Source document stored"
        );

        let analysis: AnalysisPayload = self
            .state
            .analyzer
            .analyze(
                storage.bucket(),
                &source_key,
                &FeatureType::DOCUMENT_DEFAULT,
            )
            .await?;

        let output_key = self.state.keys.analysis_key();
        let body = serde_json::to_vec_pretty(&analysis)?;
        storage
            .put(&output_key, Bytes::from(body), ANALYSIS_CONTENT_TYPE)
            .await
            .map_err(|source| UploadError::Storage {
                stage: UploadStage::StoreResult,
                source,
            })?;

        tracing::info!(
            source_key = %source_key,
            output_key = %output_key,
            analyzer = self.state.analyzer.name(),
            "File processed successfully"
        );

        Ok(UploadResponse::success(output_key, analysis))
    }
}
