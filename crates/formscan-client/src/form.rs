//! Upload form view model.
//!
//! Holds the same two pieces of state as the browser form: the selected file
//! and the status message shown to the user. Submitting posts the file as the
//! multipart field `file` and displays the server's `message`.

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

/// Shown whenever the upload cannot produce a server message.
pub const UPLOAD_FAILED_MESSAGE: &str = "File upload failed";

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// A file picked for upload.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            data: data.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Successful reply from `POST /upload`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReply {
    pub message: String,
    #[serde(rename = "s3OutputFile")]
    pub s3_output_file: Option<String>,
    #[serde(rename = "textractData")]
    pub textract_data: Option<Value>,
}

#[derive(Debug)]
pub struct UploadForm {
    client: Client,
    endpoint: String,
    selected: Option<SelectedFile>,
    message: String,
    last_reply: Option<UploadReply>,
}

impl UploadForm {
    /// Form that submits to `{server_url}/upload`.
    pub fn new(server_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: format!("{}/upload", server_url.trim_end_matches('/')),
            selected: None,
            message: String::new(),
            last_reply: None,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.selected = Some(file);
    }

    /// Read `path` from disk and select it under its file name.
    pub async fn select_path(&mut self, path: &Path) -> Result<()> {
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("{} has no file name", path.display()))?;

        self.select_file(SelectedFile::new(name, data));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Reply of the last submit that produced a server message.
    pub fn last_reply(&self) -> Option<&UploadReply> {
        self.last_reply.as_ref()
    }

    /// Upload the selected file. Does nothing when no file is selected.
    pub async fn submit(&mut self) {
        let Some(file) = self.selected.clone() else {
            return;
        };

        match self.send(file).await {
            Ok(reply) => {
                self.message = reply.message.clone();
                self.last_reply = Some(reply);
            }
            Err(e) => {
                tracing::error!(error = %format!("{:#}", e), "Error uploading file");
                self.message = UPLOAD_FAILED_MESSAGE.to_string();
                self.last_reply = None;
            }
        }
    }

    async fn send(&self, file: SelectedFile) -> Result<UploadReply> {
        let mut part = Part::bytes(file.data).file_name(file.name);
        if let Some(content_type) = file.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .with_context(|| format!("Invalid content type: {}", content_type))?;
        }
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .context("Failed to send upload request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read upload response")?;

        tracing::debug!(status = %status, "Upload response received");

        serde_json::from_str::<UploadReply>(&body)
            .with_context(|| format!("Unexpected response (status {}): {}", status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn success_body() -> String {
        serde_json::json!({
            "message": "File processed successfully.",
            "s3OutputFile": "textract-output-1700000000001.json",
            "textractData": { "Blocks": [] }
        })
        .to_string()
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let form = UploadForm::new("http://localhost:5000/").unwrap();
        assert_eq!(form.endpoint(), "http://localhost:5000/upload");
    }

    #[test]
    fn initial_state_is_empty() {
        let form = UploadForm::new(DEFAULT_SERVER_URL).unwrap();
        assert!(form.selected().is_none());
        assert_eq!(form.message(), "");
        assert!(form.last_reply().is_none());
    }

    #[tokio::test]
    async fn submit_without_file_makes_no_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/upload")
            .expect(0)
            .create_async()
            .await;

        let mut form = UploadForm::new(&server.url()).unwrap();
        form.submit().await;

        mock.assert_async().await;
        assert_eq!(form.message(), "");
    }

    #[tokio::test]
    async fn submit_posts_file_field_and_shows_message() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/upload")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=.+".to_string()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="file"; filename="a.pdf""#.to_string()),
                Matcher::Regex("%PDF-1.4".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(success_body())
            .create_async()
            .await;

        let mut form = UploadForm::new(&server.url()).unwrap();
        form.select_file(SelectedFile::new("a.pdf", b"%PDF-1.4".to_vec()));
        form.submit().await;

        mock.assert_async().await;
        assert_eq!(form.message(), "File processed successfully.");
        let reply = form.last_reply().unwrap();
        assert_eq!(
            reply.s3_output_file.as_deref(),
            Some("textract-output-1700000000001.json")
        );
    }

    #[tokio::test]
    async fn content_type_is_sent_when_set() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/upload")
            .match_body(Matcher::Regex("(?i)content-type: image/png".to_string()))
            .with_status(200)
            .with_body(success_body())
            .create_async()
            .await;

        let mut form = UploadForm::new(&server.url()).unwrap();
        form.select_file(
            SelectedFile::new("invoice.png", b"png".to_vec()).with_content_type("image/png"),
        );
        form.submit().await;

        mock.assert_async().await;
        assert_eq!(form.message(), "File processed successfully.");
    }

    #[tokio::test]
    async fn text_error_body_shows_upload_failed() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/upload")
            .with_status(500)
            .with_header("content-type", "text/plain")
            .with_body("Error processing file: AccessDenied")
            .create_async()
            .await;

        let mut form = UploadForm::new(&server.url()).unwrap();
        form.select_file(SelectedFile::new("a.pdf", b"data".to_vec()));
        form.submit().await;

        mock.assert_async().await;
        assert_eq!(form.message(), UPLOAD_FAILED_MESSAGE);
        assert!(form.last_reply().is_none());
    }

    #[tokio::test]
    async fn network_failure_shows_upload_failed() {
        // Nothing listens on port 1
        let mut form = UploadForm::new("http://127.0.0.1:1").unwrap();
        form.select_file(SelectedFile::new("a.pdf", b"data".to_vec()));
        form.submit().await;

        assert_eq!(form.message(), UPLOAD_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn clear_returns_to_no_selection() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/upload")
            .expect(0)
            .create_async()
            .await;

        let mut form = UploadForm::new(&server.url()).unwrap();
        form.select_file(SelectedFile::new("a.pdf", b"data".to_vec()));
        form.clear();
        form.submit().await;

        mock.assert_async().await;
        assert!(form.selected().is_none());
    }

    #[tokio::test]
    async fn select_path_uses_file_name() {
        let path = std::env::temp_dir().join(format!("formscan-client-{}.pdf", std::process::id()));
        tokio::fs::write(&path, b"%PDF").await.unwrap();

        let mut form = UploadForm::new(DEFAULT_SERVER_URL).unwrap();
        form.select_path(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        let selected = form.selected().unwrap();
        assert_eq!(selected.name, path.file_name().unwrap().to_string_lossy());
        assert_eq!(selected.data, b"%PDF");
    }

    #[tokio::test]
    async fn select_missing_path_fails() {
        let mut form = UploadForm::new(DEFAULT_SERVER_URL).unwrap();
        let result = form
            .select_path(Path::new("/nonexistent/formscan/missing.pdf"))
            .await;
        assert!(result.is_err());
        assert!(form.selected().is_none());
    }
}
