use crate::core::StoreConfigProvider;
use crate::utils::error::{OfferError, Result};
use crate::utils::validation::Validate;
use std::env;

/// Store connection read from the environment, used when no config file exists.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub store_url: String,
    pub api_key: String,
    pub table: String,
    pub reset_after_save: bool,
}

impl EnvConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            store_url: env::var("SUPABASE_URL").map_err(|_| OfferError::MissingConfigError {
                field: "SUPABASE_URL".to_string(),
            })?,
            api_key: env::var("SUPABASE_SERVICE_ROLE_KEY").map_err(|_| {
                OfferError::MissingConfigError {
                    field: "SUPABASE_SERVICE_ROLE_KEY".to_string(),
                }
            })?,
            table: env::var("OFFER_TABLE").unwrap_or_else(|_| super::toml_config::default_table()),
            reset_after_save: env::var("OFFER_RESET_AFTER_SAVE")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        })
    }
}

/// `1`, `true` and `yes` in any case switch a flag on; anything else leaves it off.
fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    ["1", "true", "yes"]
        .iter()
        .any(|on| value.eq_ignore_ascii_case(on))
}

impl StoreConfigProvider for EnvConfig {
    fn store_url(&self) -> &str {
        &self.store_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn table(&self) -> &str {
        &self.table
    }
}

impl Validate for EnvConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("SUPABASE_URL", &self.store_url)?;
        validate_non_empty_string("SUPABASE_SERVICE_ROLE_KEY", &self.api_key)?;
        validate_table_name("OFFER_TABLE", &self.table)?;

        tracing::debug!("✅ Environment configuration validation passed");
        Ok(())
    }
}
