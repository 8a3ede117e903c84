use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SUCCESS_MESSAGE: &str = "File processed successfully.";

/// A file received from the upload form. Lives only for one request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub original_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(
        original_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            original_name: original_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Body of a successful `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
    /// Storage key of the stored analysis artifact
    #[serde(rename = "s3OutputFile")]
    pub s3_output_file: String,
    /// Analysis payload exactly as returned by the analysis service
    #[serde(rename = "textractData")]
    #[schema(value_type = Object)]
    pub textract_data: serde_json::Value,
}

impl UploadResponse {
    pub fn success(s3_output_file: String, textract_data: serde_json::Value) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            s3_output_file,
            textract_data,
        }
    }
}
