pub mod analysis;
pub mod upload;

pub use analysis::FeatureType;
pub use upload::{UploadResponse, UploadedFile, SUCCESS_MESSAGE};
