use crate::adapters::http::ReqwestTransport;
use crate::app::services::{
    AccountsService, BridgeService, CapabilityRequestsService, ChargesService, CustomersService,
    FundingEventsService, OrganizationsService, PaykeysService, PayoutsService, ReportsService,
};
use crate::config::ClientConfig;
use crate::core::request::{insert_header, ApiCall, RequestOptions, STRADDLE_ACCOUNT_ID};
use crate::domain::models::ErrorResponse;
use crate::domain::ports::{ApiRequest, ApiResponse, Transport};
use crate::utils::error::{Result, StraddleError};
use crate::utils::validation::Validate;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

const USER_AGENT_VALUE: &str = concat!("straddle-rust/", env!("CARGO_PKG_VERSION"));

/// Entry point of the crate. Cheap to share behind an `Arc`; every service is a
/// borrowed view over it.
#[derive(Clone)]
pub struct StraddleClient {
    config: ClientConfig,
    base_url: Url,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for StraddleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StraddleClient")
            .field("base_url", &self.base_url.as_str())
            .field("environment", &self.config.environment)
            .finish_non_exhaustive()
    }
}

impl StraddleClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Validates `config` before any request can be built from it.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        let base_url = Url::parse(&config.base_url())?;
        if base_url.cannot_be_a_base() {
            return Err(StraddleError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }
        Ok(Self {
            config,
            base_url,
            transport,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn charges(&self) -> ChargesService<'_> {
        ChargesService::new(self)
    }

    pub fn payouts(&self) -> PayoutsService<'_> {
        PayoutsService::new(self)
    }

    pub fn customers(&self) -> CustomersService<'_> {
        CustomersService::new(self)
    }

    pub fn paykeys(&self) -> PaykeysService<'_> {
        PaykeysService::new(self)
    }

    pub fn bridge(&self) -> BridgeService<'_> {
        BridgeService::new(self)
    }

    pub fn accounts(&self) -> AccountsService<'_> {
        AccountsService::new(self)
    }

    pub fn capability_requests(&self) -> CapabilityRequestsService<'_> {
        CapabilityRequestsService::new(self)
    }

    pub fn organizations(&self) -> OrganizationsService<'_> {
        OrganizationsService::new(self)
    }

    pub fn funding_events(&self) -> FundingEventsService<'_> {
        FundingEventsService::new(self)
    }

    pub fn reports(&self) -> ReportsService<'_> {
        ReportsService::new(self)
    }

    /// Joins percent-encoded path segments onto the base URL and appends the
    /// query pairs.
    pub fn endpoint_url(&self, path: &[String], query: &[(String, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StraddleError::ConfigError {
                message: format!("base URL {} cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(path);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    fn headers(&self, options: &RequestOptions, has_body: bool) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", self.config.api_key);
        let mut auth = HeaderValue::from_str(&bearer)
            .map_err(|_| StraddleError::InvalidHeader { name: "authorization" })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        if has_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if let Some(account_id) = &self.config.account_id {
            insert_header(&mut headers, STRADDLE_ACCOUNT_ID, account_id)?;
        }
        options.apply(&mut headers)?;
        Ok(headers)
    }

    pub(crate) async fn execute<R>(&self, call: ApiCall, options: &RequestOptions) -> Result<R>
    where
        R: DeserializeOwned + Validate,
    {
        let url = self.endpoint_url(&call.path, &call.query)?;
        let headers = self.headers(options, call.body.is_some())?;
        let request = ApiRequest {
            method: call.method,
            url,
            headers,
            body: call.body,
        };

        tracing::debug!("{} {}", request.method, request.url);
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let error = api_error(response);
            tracing::warn!("Straddle API request failed: {}", error);
            return Err(error);
        }

        let parsed: R = serde_json::from_str(&response.body)?;
        if self.config.response_validation {
            parsed.validate()?;
        }
        Ok(parsed)
    }
}

fn api_error(response: ApiResponse) -> StraddleError {
    let message = serde_json::from_str::<ErrorResponse>(&response.body)
        .ok()
        .and_then(|error| error.message())
        .unwrap_or_else(|| {
            if response.body.is_empty() {
                format!("HTTP {}", response.status)
            } else {
                response.body.clone()
            }
        });

    StraddleError::Api {
        status: response.status,
        message,
        body: response.body,
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::domain::models::{DeviceInfo, ResponseEnvelope};
    use serde_json::json;

    #[tokio::test]
    async fn test_headers_and_url() {
        let transport = RecordingTransport::new(200, envelope(json!({ "ip_address": "1.1.1.1" })));
        let mut config = ClientConfig::new("sk_test_123");
        config.base_url = Some("https://sandbox.straddle.io/".to_string());
        config.account_id = Some("acct_default".to_string());
        let client = StraddleClient::with_transport(config, transport.clone()).unwrap();

        let options = RequestOptions::new()
            .with_correlation_id("corr-1")
            .with_account_id("acct_override");
        let _: ResponseEnvelope<DeviceInfo> = client
            .execute(ApiCall::get(&["v1", "charges", "ch 1/../x"]), &options)
            .await
            .unwrap();

        let request = transport.last();
        assert_eq!(
            request.url.as_str(),
            "https://sandbox.straddle.io/v1/charges/ch%201%2F..%2Fx"
        );
        assert_eq!(request.headers[AUTHORIZATION], "Bearer sk_test_123");
        assert_eq!(request.headers["correlation-id"], "corr-1");
        assert_eq!(request.headers[STRADDLE_ACCOUNT_ID], "acct_override");
        assert!(request.headers.get(CONTENT_TYPE).is_none());
        assert!(request.headers[USER_AGENT]
            .to_str()
            .unwrap()
            .starts_with("straddle-rust/"));
    }

    #[test]
    fn test_injected_transport_still_validates_config() {
        let transport = RecordingTransport::new(200, envelope(json!({})));

        let result = StraddleClient::with_transport(ClientConfig::new(""), transport.clone());
        assert!(matches!(
            result,
            Err(StraddleError::InvalidConfigValueError { ref field, .. }) if field == "api_key"
        ));

        let mut config = ClientConfig::new("sk_test_123");
        config.account_id = Some(String::new());
        assert!(StraddleClient::with_transport(config, transport.clone()).is_err());

        let mut config = ClientConfig::new("sk_test_123");
        config.timeout_seconds = 0;
        assert!(StraddleClient::with_transport(config, transport.clone()).is_err());

        assert!(transport.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_base_url_path_prefix_is_kept() {
        let transport = RecordingTransport::new(200, envelope(json!({ "ip_address": "1.1.1.1" })));
        let mut config = ClientConfig::new("sk_test_123");
        config.base_url = Some("http://localhost:8080/proxy".to_string());
        let client = StraddleClient::with_transport(config, transport.clone()).unwrap();

        let url = client
            .endpoint_url(
                &["v1".to_string(), "customers".to_string()],
                &[("page_size".to_string(), "5".to_string())],
            )
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/proxy/v1/customers?page_size=5");
    }

    #[tokio::test]
    async fn test_error_response_maps_to_api_error() {
        let transport = RecordingTransport::new(
            404,
            json!({
                "error": { "status": 404, "title": "Not Found", "type": "not_found", "detail": "Charge ch_1 not found" },
                "response_type": "error"
            }),
        );
        let client = client_with(transport);

        let result: Result<ResponseEnvelope<DeviceInfo>> = client
            .execute(ApiCall::get(&["v1", "charges", "ch_1"]), &RequestOptions::default())
            .await;

        match result {
            Err(StraddleError::Api { status, message, .. }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Charge ch_1 not found");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_response_validation_is_opt_in() {
        let body = envelope(json!({ "unexpected": true }));

        let lenient = client_with(RecordingTransport::new(200, body.clone()));
        let parsed: ResponseEnvelope<DeviceInfo> = lenient
            .execute(ApiCall::get(&["v1", "x"]), &RequestOptions::default())
            .await
            .unwrap();
        assert!(parsed.data().unwrap().ip_address().is_err());

        let mut config = ClientConfig::new("sk_test_123");
        config.response_validation = true;
        let strict =
            StraddleClient::with_transport(config, RecordingTransport::new(200, body)).unwrap();
        let result: Result<ResponseEnvelope<DeviceInfo>> = strict
            .execute(ApiCall::get(&["v1", "x"]), &RequestOptions::default())
            .await;
        assert!(matches!(result, Err(StraddleError::MissingRequiredField { .. })));
    }

    #[tokio::test]
    async fn test_malformed_body_is_serialization_error() {
        let client = client_with(RecordingTransport::with_text(200, "<html>"));
        let result: Result<ResponseEnvelope<DeviceInfo>> = client
            .execute(ApiCall::get(&["v1", "x"]), &RequestOptions::default())
            .await;
        assert!(matches!(result, Err(StraddleError::Serialization(_))));
    }
}
