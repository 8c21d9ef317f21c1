//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the pricing
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PricingConfig;

/// Loads and provides access to the pricing configuration.
///
/// # Example
///
/// ```no_run
/// use booking_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pricing.yaml").unwrap();
/// let fee = loader.config().parent_night_surcharge().fee_per_day;
/// println!("Parent night fee per day: {}", fee);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PricingConfig,
}

impl ConfigLoader {
    /// Loads the pricing configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file cannot be read,
    /// or [`EngineError::ConfigParseError`] if it is not valid YAML for
    /// [`PricingConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Returns the loaded pricing configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_config_not_found() {
        let result = ConfigLoader::load("/does/not/exist/pricing.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_repository_config() {
        let loader = ConfigLoader::load("./config/pricing.yaml").unwrap();
        assert_eq!(loader.config().parent_night_surcharge().currency, "EUR");
        assert_eq!(loader.config().caregiver_night_surcharge().currency, "MAD");
    }
}
