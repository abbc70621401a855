use thiserror::Error;

#[derive(Error, Debug)]
pub enum StraddleError {
    #[error("Invalid {enum_name} value: {value:?}")]
    InvalidEnumValue {
        enum_name: &'static str,
        value: String,
    },

    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    #[error("Field {field} has an unexpected type: {source}")]
    InvalidFieldType {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Arithmetic overflow while computing {field}")]
    Overflow { field: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api {
        status: u16,
        message: String,
        body: String,
    },

    #[error("Invalid value for header {name}")]
    InvalidHeader { name: &'static str },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Serialization,
    Network,
    Api,
    Configuration,
}

impl StraddleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StraddleError::InvalidEnumValue { .. }
            | StraddleError::MissingRequiredField { .. }
            | StraddleError::InvalidFieldType { .. }
            | StraddleError::Overflow { .. } => ErrorCategory::Validation,
            StraddleError::Serialization(_) => ErrorCategory::Serialization,
            StraddleError::Http(_) => ErrorCategory::Network,
            StraddleError::Api { .. } => ErrorCategory::Api,
            StraddleError::InvalidHeader { .. }
            | StraddleError::Url(_)
            | StraddleError::Io(_)
            | StraddleError::ConfigError { .. }
            | StraddleError::InvalidConfigValueError { .. }
            | StraddleError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// HTTP status of an API error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            StraddleError::Api { status, .. } => Some(*status),
            StraddleError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Check the request fields against the API reference",
            ErrorCategory::Serialization => "The payload is not valid JSON for this model",
            ErrorCategory::Network => "Check network connectivity and the configured base URL",
            ErrorCategory::Api => "Inspect the API error detail; the request was rejected",
            ErrorCategory::Configuration => {
                "Check the API key, environment and base URL settings"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StraddleError>;
