use crate::config::ClientConfig;
use crate::utils::error::{Result, StraddleError};
use regex::Regex;
use std::path::Path;
use toml::{Table, Value};

impl ClientConfig {
    /// Loads a TOML client configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML, then replaces `${VAR}` placeholders inside string values
    /// with environment values. Substituted text is never parsed as TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut table: Table = toml::from_str(content).map_err(|e| toml_error(&e))?;

        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StraddleError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;
        for (_, value) in table.iter_mut() {
            substitute_env_vars(&re, value);
        }

        Value::Table(table).try_into().map_err(|e| toml_error(&e))
    }
}

fn toml_error(e: &dyn std::fmt::Display) -> StraddleError {
    StraddleError::ConfigError {
        message: format!("TOML parsing error: {}", e),
    }
}

/// Unset variables are left as the literal placeholder.
fn substitute_env_vars(re: &Regex, value: &mut Value) {
    match value {
        Value::String(text) => {
            let replaced = re
                .replace_all(text, |caps: &regex::Captures| {
                    let var_name = &caps[1];
                    std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
                })
                .into_owned();
            *text = replaced;
        }
        Value::Array(items) => items
            .iter_mut()
            .for_each(|item| substitute_env_vars(re, item)),
        Value::Table(table) => table
            .iter_mut()
            .for_each(|(_, item)| substitute_env_vars(re, item)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
api_key = "sk_test_abc"
environment = "production"
account_id = "acct_42"
timeout_seconds = 15
response_validation = true
"#;

        let config = ClientConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api_key, "sk_test_abc");
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.account_id.as_deref(), Some("acct_42"));
        assert_eq!(config.timeout_seconds, 15);
        assert!(config.response_validation);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_apply() {
        let config = ClientConfig::from_toml_str(r#"api_key = "sk_test_abc""#).unwrap();

        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(config.timeout_seconds, 60);
        assert!(!config.response_validation);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STRADDLE_TEST_TOML_KEY", "sk_from_env");

        let config = ClientConfig::from_toml_str(
            r#"
api_key = "${STRADDLE_TEST_TOML_KEY}"
base_url = "${STRADDLE_TEST_TOML_UNSET_URL}"
"#,
        )
        .unwrap();
        assert_eq!(config.api_key, "sk_from_env");
        assert_eq!(
            config.base_url.as_deref(),
            Some("${STRADDLE_TEST_TOML_UNSET_URL}")
        );
        assert!(config.validate().is_err());

        std::env::remove_var("STRADDLE_TEST_TOML_KEY");
    }

    #[test]
    fn test_environment_is_case_insensitive() {
        let config = ClientConfig::from_toml_str(
            r#"
api_key = "sk"
environment = "Production"
"#,
        )
        .unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(
            serde_json::to_value(config.environment).unwrap(),
            serde_json::json!("production")
        );
    }

    #[test]
    fn test_substituted_values_are_not_parsed_as_toml() {
        let hostile = "sk\"\nresponse_validation = true\nx = \"\\";
        std::env::set_var("STRADDLE_TEST_TOML_HOSTILE_KEY", hostile);

        let config =
            ClientConfig::from_toml_str(r#"api_key = "${STRADDLE_TEST_TOML_HOSTILE_KEY}""#)
                .unwrap();
        assert_eq!(config.api_key, hostile);
        assert!(!config.response_validation);

        std::env::remove_var("STRADDLE_TEST_TOML_HOSTILE_KEY");
    }

    #[test]
    fn test_invalid_environment() {
        let result = ClientConfig::from_toml_str(
            r#"
api_key = "sk"
environment = "staging"
"#,
        );
        assert!(matches!(result, Err(StraddleError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"api_key = \"sk_file\"\nbase_url = \"http://localhost:4010\"\n")
            .unwrap();

        let config = ClientConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api_key, "sk_file");
        assert_eq!(config.base_url(), "http://localhost:4010");
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            ClientConfig::from_file("/definitely/not/here.toml"),
            Err(StraddleError::Io(_))
        ));
    }
}
