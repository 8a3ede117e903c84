pub mod upload;

pub use upload::{UploadError, UploadService, UploadStage};
