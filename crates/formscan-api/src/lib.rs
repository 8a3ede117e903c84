//! Formscan API Library
//!
//! This crate provides the HTTP upload endpoint, the served upload form and
//! application setup.

// Module declarations
mod api_doc;
mod handlers;
mod middleware;
mod utils;

// Public modules
pub mod error;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::HttpAppError;
pub use state::AppState;
