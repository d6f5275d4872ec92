//! Configuration loading.
//!
//! Everything is optional in the TOML source; omitted sections and fields
//! fall back to the values in [`defaults`].

pub mod defaults;

mod wellness_config;

pub use wellness_config::WellnessConfig;

use serde::{Deserialize, Serialize};

use crate::errors::KaizenResult;

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KaizenConfig {
    pub wellness: WellnessConfig,
}

impl KaizenConfig {
    /// Parse and validate a TOML document. Empty input yields all
    /// defaults.
    pub fn from_toml(input: &str) -> KaizenResult<Self> {
        let config: Self = toml::from_str(input).map_err(crate::errors::ConfigError::from)?;
        config.wellness.validate()?;
        Ok(config)
    }
}
