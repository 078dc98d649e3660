//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! deduction rule table from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::WageRules;

/// Loads and provides access to the deduction rule table.
///
/// # File Format
///
/// The configuration is a single YAML file:
/// ```text
/// config/rules.yaml
/// ```
/// containing the fields of [`WageRules`].
///
/// # Example
///
/// ```no_run
/// use wage_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rules.yaml").unwrap();
/// println!("Base wage: {}", loader.rules().base_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: WageRules,
}

impl ConfigLoader {
    /// Loads the rule table from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rules file (e.g., "./config/rules.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the
    /// file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let rules = serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { rules })
    }

    /// Builds a loader carrying the built-in standard rule table.
    pub fn builtin() -> Self {
        Self {
            rules: WageRules::default(),
        }
    }

    /// Returns the loaded rule table.
    pub fn rules(&self) -> &WageRules {
        &self.rules
    }

    /// Consumes the loader and returns the rule table.
    pub fn into_rules(self) -> WageRules {
        self.rules
    }
}
