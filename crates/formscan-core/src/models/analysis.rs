use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Category of structured content requested from the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    Tables,
    Forms,
}

impl FeatureType {
    /// Feature set requested for every uploaded document.
    pub const DOCUMENT_DEFAULT: [FeatureType; 2] = [FeatureType::Tables, FeatureType::Forms];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Tables => "TABLES",
            FeatureType::Forms => "FORMS",
        }
    }
}

impl Display for FeatureType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
