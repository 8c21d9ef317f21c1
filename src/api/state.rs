//! Application state for the Shift Time & Pay Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, PricingConfig};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded pricing configuration.
#[derive(Clone)]
pub struct AppState {
    /// The loaded pricing configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the pricing configuration.
    pub fn pricing(&self) -> &PricingConfig {
        self.config.config()
    }
}
