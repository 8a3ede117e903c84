//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`. Gateway errors convert into
//! `AppError` here, and `ErrorMetadata` decides the status code and body.
//! Bodies are plain text: the upload form only reads `message` from
//! successful responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use formscan_analysis::AnalysisError;
use formscan_core::{AppError, ErrorMetadata, LogLevel};
use formscan_storage::StorageError;

use crate::services::upload::UploadError;

/// `AppError` as an axum response. `AppError` lives in formscan-core, which
/// does not depend on axum.
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        HttpAppError(AppError::Storage(err.to_string()))
    }
}

impl From<AnalysisError> for HttpAppError {
    fn from(err: AnalysisError) -> Self {
        HttpAppError(AppError::Analysis(err.to_string()))
    }
}

impl From<UploadError> for HttpAppError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::Storage { source, .. } => source.into(),
            UploadError::Analysis(source) => source.into(),
            UploadError::Serialize(source) => HttpAppError(AppError::Internal(format!(
                "Failed to serialize analysis result: {}",
                source
            ))),
        }
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, code, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, code, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type, code, "Error occurred");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        (status, app_error.client_message()).into_response()
    }
}
