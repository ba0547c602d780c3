use crate::constants::{
    ACCOUNT_KEY_ENV, ACCT_NAME, CONFIG_FILE_NAME, CONTAINER_NAME, RETRY_STEP_SECS,
    SAS_EXPIRY_HOURS, SAS_START_OFFSET_HOURS, SOURCE_BASE_URL,
};
use crate::errors::{AppError, AppResult};
use dotenv::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Resolved configuration with all values filled in (no Options).
///
/// This struct holds the archiver defaults and can be deserialized by the TOML
/// loader. All fields have concrete values, making it safe to access directly
/// without unwrapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Storage account holding the cover container
    pub account_name: String,
    /// Container the covers are uploaded into
    pub container_name: String,
    /// Base URL under which the dated scan paths live
    pub source_base_url: String,
    /// Linear backoff step between download retries, in seconds
    pub retry_step_secs: u64,
    /// How far before issuance the SAS window opens, in hours
    pub sas_start_offset_hours: i64,
    /// How far after issuance the SAS window closes, in hours
    pub sas_expiry_hours: i64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            account_name: ACCT_NAME.to_string(),
            container_name: CONTAINER_NAME.to_string(),
            source_base_url: SOURCE_BASE_URL.to_string(),
            retry_step_secs: RETRY_STEP_SECS,
            sas_start_offset_hours: SAS_START_OFFSET_HOURS,
            sas_expiry_hours: SAS_EXPIRY_HOURS,
        }
    }
}

impl ResolvedConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// Missing keys fall back to the defaults above. Rejects unknown keys to
    /// prevent typos from being silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the TOML is malformed, unknown keys are
    /// present, or a value fails validation; `IoError` if the file cannot
    /// be read.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ResolvedConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.account_name.is_empty() {
            return Err(AppError::InvalidInput(
                "account_name must not be empty".into(),
            ));
        }
        if self.container_name.is_empty() {
            return Err(AppError::InvalidInput(
                "container_name must not be empty".into(),
            ));
        }
        if self.retry_step_secs == 0 {
            return Err(AppError::InvalidInput(
                "retry_step_secs must be greater than 0".into(),
            ));
        }
        if self.sas_start_offset_hours < 0 {
            return Err(AppError::InvalidInput(
                "sas_start_offset_hours must not be negative".into(),
            ));
        }
        if self.sas_expiry_hours <= 0 {
            return Err(AppError::InvalidInput(
                "sas_expiry_hours must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Full application configuration: resolved values plus the account secret.
///
/// The secret is an explicit field rather than an ambient `env::var` lookup
/// at the point of use, so the publisher can be exercised without touching
/// process-wide state.
pub struct AppConfig {
    pub resolved: ResolvedConfig,
    account_key: String,
}

impl AppConfig {
    /// Loads configuration for a run.
    ///
    /// Reads `covers.toml` from the working directory when present, otherwise
    /// uses defaults. The account key comes from the `ACCT_KEY` environment
    /// variable (a `.env` file is honored); its absence is fatal before any
    /// network activity happens.
    pub fn load() -> AppResult<Self> {
        dotenv().ok();

        let path = Path::new(CONFIG_FILE_NAME);
        let resolved = if path.exists() {
            ResolvedConfig::from_toml_file(path)?
        } else {
            ResolvedConfig::default()
        };

        let account_key = env::var(ACCOUNT_KEY_ENV)
            .map_err(|_| AppError::MissingSecret(ACCOUNT_KEY_ENV.to_string()))?;
        Self::with_account_key(resolved, account_key)
    }

    /// Builds a configuration from an explicit secret.
    ///
    /// # Errors
    ///
    /// Returns `MissingSecret` if the key is empty or whitespace.
    pub fn with_account_key(resolved: ResolvedConfig, account_key: String) -> AppResult<Self> {
        if account_key.trim().is_empty() {
            return Err(AppError::MissingSecret(ACCOUNT_KEY_ENV.to_string()));
        }
        Ok(Self {
            resolved,
            account_key,
        })
    }

    pub fn account_key(&self) -> &str {
        &self.account_key
    }
}
