#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliArgs, Command, SelectionArgs};
pub use env::EnvConfig;
pub use toml_config::TomlConfig;

use crate::core::session::AfterSave;
use crate::core::StoreConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::Path;

/// Store settings from whichever source was available.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    File(TomlConfig),
    Env(EnvConfig),
}

impl StoreConfig {
    /// Reads the config file when it exists, otherwise the environment.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            Ok(StoreConfig::File(TomlConfig::from_file(path)?))
        } else {
            tracing::info!(
                "No config file at {}, reading store settings from environment",
                path.display()
            );
            Ok(StoreConfig::Env(EnvConfig::from_env()?))
        }
    }

    pub fn after_save(&self) -> AfterSave {
        match self {
            StoreConfig::File(config) => config.after_save(),
            StoreConfig::Env(config) => AfterSave::from_reset_flag(config.reset_after_save),
        }
    }
}

impl StoreConfigProvider for StoreConfig {
    fn store_url(&self) -> &str {
        match self {
            StoreConfig::File(config) => config.store_url(),
            StoreConfig::Env(config) => config.store_url(),
        }
    }

    fn api_key(&self) -> &str {
        match self {
            StoreConfig::File(config) => config.api_key(),
            StoreConfig::Env(config) => config.api_key(),
        }
    }

    fn table(&self) -> &str {
        match self {
            StoreConfig::File(config) => config.table(),
            StoreConfig::Env(config) => config.table(),
        }
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        match self {
            StoreConfig::File(config) => config.validate(),
            StoreConfig::Env(config) => config.validate(),
        }
    }
}
