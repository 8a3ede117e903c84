//! Amazon Textract analyzer

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_textract::config::Credentials;
use aws_sdk_textract::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_textract::types::{Document, FeatureType as TextractFeature, S3Object};
use aws_sdk_textract::Client as TextractClient;
use formscan_core::FeatureType;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::convert::analyze_output_to_json;
use crate::traits::{
    validate_request, AnalysisError, AnalysisPayload, AnalysisResult, DocumentAnalyzer,
};

/// Analyzer backed by Textract's synchronous `AnalyzeDocument` API
#[derive(Clone)]
pub struct TextractAnalyzer {
    client: TextractClient,
}

impl Debug for TextractAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("TextractAnalyzer").finish()
    }
}

impl TextractAnalyzer {
    /// Create a Textract client for the given region and static credentials
    pub async fn new(region: &str, access_key_id: &str, secret_access_key: &str) -> Self {
        let credentials = Credentials::new(
            access_key_id,
            secret_access_key,
            None,
            None,
            "formscan-config",
        );

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .credentials_provider(credentials)
            .load()
            .await;

        Self::from_client(TextractClient::new(&config))
    }

    pub fn from_client(client: TextractClient) -> Self {
        Self { client }
    }
}

fn to_textract_feature(feature: FeatureType) -> TextractFeature {
    match feature {
        FeatureType::Tables => TextractFeature::Tables,
        FeatureType::Forms => TextractFeature::Forms,
    }
}

#[async_trait]
impl DocumentAnalyzer for TextractAnalyzer {
    async fn analyze(
        &self,
        bucket: &str,
        key: &str,
        features: &[FeatureType],
    ) -> AnalysisResult<AnalysisPayload> {
        validate_request(bucket, key, features)?;

        let document = Document::builder()
            .s3_object(S3Object::builder().bucket(bucket).name(key).build())
            .build();

        let mut request = self.client.analyze_document().document(document);
        for feature in features {
            request = request.feature_types(to_textract_feature(*feature));
        }

        let feature_names = features
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let start = std::time::Instant::now();

        let output = request.send().await.map_err(|e| {
            // Prefer the service's own "Code: message" over the generic SDK wrapper text
            let message = e
                .as_service_error()
                .and_then(|se| {
                    se.message().map(|msg| match se.code() {
                        Some(code) => format!("{}: {}", code, msg),
                        None => msg.to_string(),
                    })
                })
                .unwrap_or_else(|| DisplayErrorContext(&e).to_string());

            tracing::error!(
                error = %message,
                bucket = %bucket,
                key = %key,
                features = %feature_names,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Textract analysis failed"
            );
            AnalysisError::ServiceError(message)
        })?;

        tracing::info!(
            bucket = %bucket,
            key = %key,
            features = %feature_names,
            blocks = output.blocks().len(),
            pages = ?output.document_metadata().and_then(|m| m.pages()),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Textract analysis completed"
        );

        Ok(analyze_output_to_json(&output))
    }

    fn name(&self) -> &'static str {
        "textract"
    }
}
