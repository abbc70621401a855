#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{Result, StraddleError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::time::Duration;

pub const SANDBOX_URL: &str = "https://sandbox.straddle.io";
pub const PRODUCTION_URL: &str = "https://production.straddle.io";

const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

/// Goes through `FromStr` so TOML accepts the same spellings as the
/// environment variable and the CLI flag.
impl<'de> Deserialize<'de> for Environment {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|_| serde::de::Error::unknown_variant(&raw, &["sandbox", "production"]))
    }
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_URL,
            Environment::Production => PRODUCTION_URL,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    #[serde(default)]
    pub environment: Environment,
    /// Overrides the environment's URL, e.g. for a proxy or a mock server.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Default `Straddle-Account-Id` header for every request.
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Run `validate()` on every decoded response.
    #[serde(default)]
    pub response_validation: bool,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("account_id", &self.account_id)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("response_validation", &self.response_validation)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            environment: Environment::default(),
            base_url: None,
            account_id: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            response_validation: false,
        }
    }

    /// Reads `STRADDLE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("STRADDLE_API_KEY").ok_or_else(|| StraddleError::MissingConfigError {
            field: "STRADDLE_API_KEY".to_string(),
        })?;
        let mut config = Self::new(api_key);

        if let Some(value) = lookup("STRADDLE_ENVIRONMENT") {
            config.environment =
                value
                    .parse()
                    .map_err(|_| StraddleError::InvalidConfigValueError {
                        field: "STRADDLE_ENVIRONMENT".to_string(),
                        value: value.clone(),
                        reason: "Expected sandbox or production".to_string(),
                    })?;
        }
        config.base_url = lookup("STRADDLE_BASE_URL");
        config.account_id = lookup("STRADDLE_ACCOUNT_ID");
        if let Some(value) = lookup("STRADDLE_TIMEOUT_SECONDS") {
            config.timeout_seconds =
                value
                    .parse()
                    .map_err(|_| StraddleError::InvalidConfigValueError {
                        field: "STRADDLE_TIMEOUT_SECONDS".to_string(),
                        value: value.clone(),
                        reason: "Expected a whole number of seconds".to_string(),
                    })?;
        }
        Ok(config)
    }

    /// Effective base URL: the explicit override, else the environment's.
    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| self.environment.base_url().to_string())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_key", &self.api_key)?;
        if let Some(base_url) = &self.base_url {
            validate_url("base_url", base_url)?;
        }
        if let Some(account_id) = &self.account_id {
            validate_non_empty_string("account_id", account_id)?;
        }
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[("STRADDLE_API_KEY", "sk_1")])).unwrap();

        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(config.base_url(), SANDBOX_URL);
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("STRADDLE_API_KEY", "sk_1"),
            ("STRADDLE_ENVIRONMENT", "Production"),
            ("STRADDLE_ACCOUNT_ID", "acct_1"),
            ("STRADDLE_TIMEOUT_SECONDS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.base_url(), PRODUCTION_URL);
        assert_eq!(config.account_id.as_deref(), Some("acct_1"));
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_from_lookup_errors() {
        assert!(matches!(
            ClientConfig::from_lookup(lookup_from(&[])),
            Err(StraddleError::MissingConfigError { .. })
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup_from(&[
                ("STRADDLE_API_KEY", "sk_1"),
                ("STRADDLE_ENVIRONMENT", "staging"),
            ])),
            Err(StraddleError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_validation() {
        let mut config = ClientConfig::new(" ");
        assert!(config.validate().is_err());

        config.api_key = "sk_1".to_string();
        config.base_url = Some("ftp://example.com".to_string());
        assert!(config.validate().is_err());

        config.base_url = Some("http://127.0.0.1:9000".to_string());
        config.timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.timeout_seconds = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new("sk_live_secret");
        assert!(!format!("{:?}", config).contains("sk_live_secret"));
    }
}
