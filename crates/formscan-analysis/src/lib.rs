//! Formscan Analysis Library
//!
//! Document analysis gateway: the `DocumentAnalyzer` trait and its Amazon
//! Textract implementation. Analyzers read documents straight from the
//! object store; no document bytes pass through this crate.

#[cfg(feature = "analysis-textract")]
pub mod convert;
pub mod factory;
#[cfg(feature = "analysis-textract")]
pub mod textract;
pub mod traits;

pub use factory::create_analyzer;
#[cfg(feature = "analysis-textract")]
pub use textract::TextractAnalyzer;
pub use traits::{AnalysisError, AnalysisPayload, AnalysisResult, DocumentAnalyzer};
