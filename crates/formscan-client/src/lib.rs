//! Client side of the formscan upload flow.
//!
//! `UploadForm` mirrors the browser upload form; the `formscan` binary drives
//! it from the command line.

pub mod form;

pub use form::{SelectedFile, UploadForm, UploadReply, DEFAULT_SERVER_URL, UPLOAD_FAILED_MESSAGE};

/// Initialize tracing for the CLI.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
