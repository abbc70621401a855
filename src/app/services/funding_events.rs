use crate::core::client::StraddleClient;
use crate::core::request::{ApiCall, RequestOptions};
use crate::domain::models::{FundingEvent, FundingEventListParams, PagedEnvelope, ResponseEnvelope};
use crate::utils::error::Result;

/// Read-only view of settlement movements.
pub struct FundingEventsService<'a> {
    client: &'a StraddleClient,
    options: RequestOptions,
}

impl<'a> FundingEventsService<'a> {
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

    pub async fn get(&self, id: &str) -> Result<ResponseEnvelope<FundingEvent>> {
        let call = ApiCall::get(&["v1", "funding_events", id]);
        self.client.execute(call, &self.options).await
    }

    pub async fn list(
        &self,
        params: &FundingEventListParams,
    ) -> Result<PagedEnvelope<FundingEvent>> {
        let call = ApiCall::get(&["v1", "funding_events"]).query(params);
        self.client.execute(call, &self.options).await
    }
}
