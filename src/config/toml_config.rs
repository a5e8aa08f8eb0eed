use crate::core::StoreConfigProvider;
use crate::core::session::AfterSave;
use crate::utils::error::{OfferError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub store: StoreSection,
    pub estimator: Option<EstimatorSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    pub url: String,
    pub api_key: String,
    #[serde(default = "default_table")]
    pub table: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimatorSection {
    /// Clear the selection after a successful save.
    pub reset_after_save: Option<bool>,
}

pub(crate) fn default_table() -> String {
    "offers".to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(OfferError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| OfferError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SUPABASE_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OfferError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn after_save(&self) -> AfterSave {
        let reset = self
            .estimator
            .as_ref()
            .and_then(|e| e.reset_after_save)
            .unwrap_or(false);
        AfterSave::from_reset_flag(reset)
    }
}

impl StoreConfigProvider for TomlConfig {
    fn store_url(&self) -> &str {
        &self.store.url
    }

    fn api_key(&self) -> &str {
        &self.store.api_key
    }

    fn table(&self) -> &str {
        &self.store.table
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_resolved("store.url", &self.store.url)?;
        validate_url("store.url", &self.store.url)?;
        validate_resolved("store.api_key", &self.store.api_key)?;
        validate_non_empty_string("store.api_key", &self.store.api_key)?;
        validate_table_name("store.table", &self.store.table)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[store]
url = "https://abc.supabase.co"
api_key = "secret"

[estimator]
reset_after_save = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.store_url(), "https://abc.supabase.co");
        assert_eq!(config.table(), "offers");
        assert_eq!(config.after_save(), AfterSave::Reset);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_keep_selection() {
        let config = TomlConfig::from_toml_str(
            r#"
[store]
url = "https://abc.supabase.co"
api_key = "secret"
table = "offers_test"
"#,
        )
        .unwrap();

        assert_eq!(config.after_save(), AfterSave::Keep);
        assert_eq!(config.table(), "offers_test");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("OFFER_TEST_STORE_KEY", "from-env");

        let toml_content = r#"
[store]
url = "https://abc.supabase.co"
api_key = "${OFFER_TEST_STORE_KEY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_key(), "from-env");

        std::env::remove_var("OFFER_TEST_STORE_KEY");
    }

    #[test]
    fn test_unresolved_placeholder_fails_validation() {
        let toml_content = r#"
[store]
url = "https://abc.supabase.co"
api_key = "${OFFER_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(OfferError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[store]
url = "invalid-url"
api_key = "secret"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_store_section_is_a_parse_error() {
        let err = TomlConfig::from_toml_str("[estimator]\nreset_after_save = false\n").unwrap_err();
        assert!(matches!(err, OfferError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[store]
url = "https://abc.supabase.co"
api_key = "secret"

[estimator]
reset_after_save = false
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.store_url(), "https://abc.supabase.co");
        assert_eq!(config.after_save(), AfterSave::Keep);
    }
}
