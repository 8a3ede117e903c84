//! Error types module
//!
//! All request-level failures are unified under `AppError`. Gateway crates keep
//! their own error enums; the API layer converts them into `AppError` so the
//! HTTP status is decided in one place.

/// Level an error is logged at when it reaches the HTTP layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Caller mistakes (missing file, bad multipart)
    Debug,
    /// Oversized uploads
    Warn,
    /// Gateway and internal failures
    Error,
}

/// How an error is rendered to the client and to the logs
pub trait ErrorMetadata {
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message
    fn client_message(&self) -> String;

    fn log_level(&self) -> LogLevel;
}

pub const NO_FILE_MESSAGE: &str = "No file uploaded.";
pub const PROCESSING_ERROR_PREFIX: &str = "Error processing file";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No file uploaded.")]
    MissingFile,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    Storage(String),

    #[error("{0}")]
    Analysis(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Short variant name for structured logs
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::MissingFile => "MissingFile",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Storage(_) => "Storage",
            AppError::Analysis(_) => "Analysis",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::MissingFile | AppError::InvalidInput(_) => 400,
            AppError::PayloadTooLarge(_) => 413,
            AppError::Storage(_) | AppError::Analysis(_) | AppError::Internal(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingFile => "NO_FILE",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Analysis(_) => "ANALYSIS_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MissingFile => NO_FILE_MESSAGE.to_string(),
            AppError::InvalidInput(ref msg) | AppError::PayloadTooLarge(ref msg) => msg.clone(),
            AppError::Storage(ref msg)
            | AppError::Analysis(ref msg)
            | AppError::Internal(ref msg) => format!("{}: {}", PROCESSING_ERROR_PREFIX, msg),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::MissingFile | AppError::InvalidInput(_) => LogLevel::Debug,
            AppError::PayloadTooLarge(_) => LogLevel::Warn,
            AppError::Storage(_) | AppError::Analysis(_) | AppError::Internal(_) => {
                LogLevel::Error
            }
        }
    }
}
