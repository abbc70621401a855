use crate::domain::raw::RawModel;
use crate::utils::error::{Result, StraddleError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::Value;

pub const CORRELATION_ID: &str = "correlation-id";
pub const IDEMPOTENCY_KEY: &str = "idempotency-key";
pub const REQUEST_ID: &str = "request-id";
pub const STRADDLE_ACCOUNT_ID: &str = "straddle-account-id";

/// Per-request headers. Unset values are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub correlation_id: Option<String>,
    pub idempotency_key: Option<String>,
    pub request_id: Option<String>,
    /// Acts on behalf of an embedded account; overrides the client default.
    pub account_id: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_correlation_id(mut self, value: impl Into<String>) -> Self {
        self.correlation_id = Some(value.into());
        self
    }

    pub fn with_idempotency_key(mut self, value: impl Into<String>) -> Self {
        self.idempotency_key = Some(value.into());
        self
    }

    pub fn with_request_id(mut self, value: impl Into<String>) -> Self {
        self.request_id = Some(value.into());
        self
    }

    pub fn with_account_id(mut self, value: impl Into<String>) -> Self {
        self.account_id = Some(value.into());
        self
    }

    /// Writes the set options into `headers`, replacing existing values.
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        let pairs = [
            (CORRELATION_ID, &self.correlation_id),
            (IDEMPOTENCY_KEY, &self.idempotency_key),
            (REQUEST_ID, &self.request_id),
            (STRADDLE_ACCOUNT_ID, &self.account_id),
        ];
        for (name, value) in pairs {
            if let Some(value) = value {
                insert_header(headers, name, value)?;
            }
        }
        Ok(())
    }
}

pub(crate) fn insert_header(headers: &mut HeaderMap, name: &'static str, value: &str) -> Result<()> {
    let value = HeaderValue::from_str(value).map_err(|_| StraddleError::InvalidHeader { name })?;
    headers.insert(HeaderName::from_static(name), value);
    Ok(())
}

/// Method, path and payload of one API operation, before the client resolves
/// it against a base URL.
#[derive(Debug, Clone)]
pub(crate) struct ApiCall {
    pub method: Method,
    pub path: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiCall {
    pub fn new(method: Method, path: &[&str]) -> Self {
        Self {
            method,
            path: path.iter().map(|segment| segment.to_string()).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: &[&str]) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &[&str]) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: &[&str]) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: &[&str]) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: &[&str]) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Sends the model's raw fields as the JSON body, nulls included.
    pub fn body<M: RawModel>(mut self, params: &M) -> Self {
        self.body = Some(params.to_value());
        self
    }

    pub fn query<M: RawModel>(mut self, params: &M) -> Self {
        self.query = params.raw().query_pairs();
        self
    }
}
