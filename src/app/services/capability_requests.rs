use crate::core::client::StraddleClient;
use crate::core::request::{ApiCall, RequestOptions};
use crate::domain::models::{
    CapabilityRequest, CapabilityRequestCreateParams, CapabilityRequestListParams, PagedEnvelope,
    ResponseEnvelope,
};
use crate::utils::error::Result;

/// Capability requests nested under an account.
pub struct CapabilityRequestsService<'a> {
    client: &'a StraddleClient,
    options: RequestOptions,
}

impl<'a> CapabilityRequestsService<'a> {
    pub fn new(client: &'a StraddleClient) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// One request is created per enabled capability; all of them are returned.
    pub async fn create(
        &self,
        account_id: &str,
        params: &CapabilityRequestCreateParams,
    ) -> Result<PagedEnvelope<CapabilityRequest>> {
        let call =
            ApiCall::post(&["v1", "accounts", account_id, "capability_requests"]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn list(
        &self,
        account_id: &str,
        params: &CapabilityRequestListParams,
    ) -> Result<PagedEnvelope<CapabilityRequest>> {
        let call =
            ApiCall::get(&["v1", "accounts", account_id, "capability_requests"]).query(params);
        self.client.execute(call, &self.options).await
    }
}
