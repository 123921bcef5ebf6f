//! User settings for Ledger Lens
//!
//! Presentation preferences and report defaults, persisted as `config.json`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::storage::{read_json, write_json_atomic};
use crate::models::DEFAULT_CURRENCY;
use crate::reports::DEFAULT_TOP_COUNT;

/// User settings for Ledger Lens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency assigned to new accounts
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// Symbol used when printing amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of categories shown by the top-spending report
    #[serde(default = "default_top_count")]
    pub default_top_count: i32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_code() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_top_count() -> i32 {
    DEFAULT_TOP_COUNT as i32
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_code: default_currency_code(),
            currency_symbol: default_currency_symbol(),
            date_format: default_date_format(),
            default_top_count: default_top_count(),
        }
    }
}

impl Settings {
    /// Load `config.json`, falling back to defaults when it was never saved
    ///
    /// Missing fields take their defaults, so older files keep loading.
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let path = paths.settings_file();
        let settings: Settings = read_json(&path).map_err(|e| match e {
            LedgerError::Storage(msg) => LedgerError::Config(msg),
            other => other,
        })?;

        debug!(
            path = %path.display(),
            schema_version = settings.schema_version,
            "loaded settings"
        );
        Ok(settings)
    }

    /// Persist settings, creating the base directory if needed
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_code, "USD");
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.default_top_count, 5);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_code = "EUR".into();
        settings.currency_symbol = "€".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.currency_code, "USD");
        assert_eq!(loaded.default_top_count, 5);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "currency = EUR").unwrap();

        let result = Settings::load_or_create(&paths);
        assert!(matches!(result, Err(LedgerError::Config(_))));
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
    }
}
