//! Gateway construction

use crate::state::AppState;
use anyhow::{Context, Result};
use formscan_analysis::create_analyzer;
use formscan_core::Config;
use formscan_storage::{create_storage, KeyGenerator};
use std::sync::Arc;

/// Build the storage and analysis gateways from configuration.
pub async fn initialize_services(config: &Config) -> Result<Arc<AppState>> {
    let storage = create_storage(config).context("Failed to initialize storage")?;
    let analyzer = create_analyzer(config)
        .await
        .context("Failed to initialize document analyzer")?;

    Ok(Arc::new(AppState::new(
        storage,
        analyzer,
        Arc::new(KeyGenerator::default()),
    )))
}
