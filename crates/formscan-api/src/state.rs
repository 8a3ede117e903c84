//! Application state shared by all handlers.
//!
//! Gateways are trait objects so tests can swap in fakes without touching
//! process-wide state.

use formscan_analysis::DocumentAnalyzer;
use formscan_storage::{KeyGenerator, Storage};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub analyzer: Arc<dyn DocumentAnalyzer>,
    pub keys: Arc<KeyGenerator>,
}

impl AppState {
    pub fn new(
        storage: Arc<dyn Storage>,
        analyzer: Arc<dyn DocumentAnalyzer>,
        keys: Arc<KeyGenerator>,
    ) -> Self {
        Self {
            storage,
            analyzer,
            keys,
        }
    }
}
