//! Test helpers: in-memory gateways and a router built around them.
//!
//! Run from workspace root: `cargo test -p formscan-api`.

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use bytes::Bytes;
use formscan_analysis::{AnalysisError, AnalysisPayload, AnalysisResult, DocumentAnalyzer};
use formscan_api::setup::routes;
use formscan_api::state::AppState;
use formscan_core::{BaseConfig, Config, FeatureType, ServiceConfig};
use formscan_storage::{FixedClock, KeyGenerator, Storage, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TEST_BUCKET: &str = "formscan-test";
pub const TEST_TIMESTAMP: i64 = 1_700_000_000_000;

/// One object written through the storage gateway.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub data: Bytes,
    pub content_type: String,
}

/// Storage that keeps objects in memory and can be told to fail.
#[derive(Default)]
pub struct MockStorage {
    objects: Mutex<HashMap<String, StoredObject>>,
    puts: Mutex<Vec<String>>,
    fail_on_put: Mutex<HashMap<usize, String>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the n-th put (1-based) fail with `message`.
    pub fn fail_put(&self, nth: usize, message: &str) {
        self.fail_on_put
            .lock()
            .unwrap()
            .insert(nth, message.to_string());
    }

    pub fn put_keys(&self) -> Vec<String> {
        self.puts.lock().unwrap().clone()
    }

    pub fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl Storage for MockStorage {
    async fn put(&self, storage_key: &str, data: Bytes, content_type: &str) -> StorageResult<()> {
        let attempt = {
            let mut puts = self.puts.lock().unwrap();
            puts.push(storage_key.to_string());
            puts.len()
        };

        if let Some(message) = self.fail_on_put.lock().unwrap().get(&attempt) {
            return Err(StorageError::UploadFailed(message.clone()));
        }

        self.objects.lock().unwrap().insert(
            storage_key.to_string(),
            StoredObject {
                data,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    fn bucket(&self) -> &str {
        TEST_BUCKET
    }
}

/// Recorded analyzer invocation.
#[derive(Debug, Clone)]
pub struct AnalyzeCall {
    pub bucket: String,
    pub key: String,
    pub features: Vec<FeatureType>,
}

/// Analyzer that returns a canned payload (or error) and records its calls.
pub struct MockAnalyzer {
    response: Result<AnalysisPayload, String>,
    calls: Mutex<Vec<AnalyzeCall>>,
}

impl MockAnalyzer {
    pub fn returning(payload: AnalysisPayload) -> Self {
        Self {
            response: Ok(payload),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<AnalyzeCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentAnalyzer for MockAnalyzer {
    async fn analyze(
        &self,
        bucket: &str,
        key: &str,
        features: &[FeatureType],
    ) -> AnalysisResult<AnalysisPayload> {
        self.calls.lock().unwrap().push(AnalyzeCall {
            bucket: bucket.to_string(),
            key: key.to_string(),
            features: features.to_vec(),
        });
        self.response
            .clone()
            .map_err(AnalysisError::ServiceError)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Sample Textract-shaped payload.
pub fn sample_analysis() -> AnalysisPayload {
    serde_json::json!({
        "DocumentMetadata": { "Pages": 1 },
        "Blocks": [
            { "BlockType": "PAGE", "Id": "page-1", "Confidence": 99.9 },
            {
                "BlockType": "KEY_VALUE_SET",
                "Id": "key-1",
                "EntityTypes": ["KEY"],
                "Relationships": [{ "Type": "VALUE", "Ids": ["value-1"] }]
            },
            { "BlockType": "TABLE", "Id": "table-1", "Confidence": 97.25 }
        ],
        "AnalyzeDocumentModelVersion": "1.0"
    })
}

pub fn create_test_config() -> Config {
    Config(Box::new(ServiceConfig {
        base: BaseConfig {
            server_port: 0,
            cors_origins: vec!["*".to_string()],
            environment: "test".to_string(),
            max_file_size_bytes: 1024 * 1024,
        },
        aws_region: "us-east-1".to_string(),
        aws_access_key_id: "AKIDEXAMPLE".to_string(),
        aws_secret_access_key: "secret".to_string(),
        s3_bucket: TEST_BUCKET.to_string(),
        s3_endpoint: None,
    }))
}

/// Test application: server plus handles on the fake gateways.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<MockStorage>,
    pub analyzer: Arc<MockAnalyzer>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn setup_test_app_with(storage: MockStorage, analyzer: MockAnalyzer) -> TestApp {
    let storage = Arc::new(storage);
    let analyzer = Arc::new(analyzer);
    let config = create_test_config();

    let state = Arc::new(AppState::new(
        storage.clone(),
        analyzer.clone(),
        Arc::new(KeyGenerator::new(Arc::new(FixedClock(TEST_TIMESTAMP)))),
    ));

    let app = routes::setup_routes(&config, state).expect("Failed to build routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        storage,
        analyzer,
    }
}

/// App whose gateways all succeed.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(
        MockStorage::new(),
        MockAnalyzer::returning(sample_analysis()),
    )
}

pub fn file_form(name: &str, mime: &str, data: &'static [u8]) -> MultipartForm {
    let part = Part::bytes(Bytes::from_static(data))
        .file_name(name.to_string())
        .mime_type(mime.to_string());
    MultipartForm::new().add_part("file", part)
}
