use crate::core::client::StraddleClient;
use crate::core::request::{ApiCall, RequestOptions};
use crate::domain::models::{
    PagedEnvelope, Payout, PayoutCancelParams, PayoutCreateParams, PayoutHoldParams,
    PayoutListParams, PayoutReleaseParams, PayoutUpdateParams, ResponseEnvelope,
};
use crate::utils::error::Result;

pub struct PayoutsService<'a> {
    client: &'a StraddleClient,
    options: RequestOptions,
}

impl<'a> PayoutsService<'a> {
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

    pub async fn create(&self, params: &PayoutCreateParams) -> Result<ResponseEnvelope<Payout>> {
        let call = ApiCall::post(&["v1", "payouts"]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn get(&self, id: &str) -> Result<ResponseEnvelope<Payout>> {
        let call = ApiCall::get(&["v1", "payouts", id]);
        self.client.execute(call, &self.options).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &PayoutUpdateParams,
    ) -> Result<ResponseEnvelope<Payout>> {
        let call = ApiCall::put(&["v1", "payouts", id]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn cancel(
        &self,
        id: &str,
        params: &PayoutCancelParams,
    ) -> Result<ResponseEnvelope<Payout>> {
        let call = ApiCall::put(&["v1", "payouts", id, "cancel"]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn hold(&self, id: &str, params: &PayoutHoldParams) -> Result<ResponseEnvelope<Payout>> {
        let call = ApiCall::put(&["v1", "payouts", id, "hold"]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn release(
        &self,
        id: &str,
        params: &PayoutReleaseParams,
    ) -> Result<ResponseEnvelope<Payout>> {
        let call = ApiCall::put(&["v1", "payouts", id, "release"]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn unmask(&self, id: &str) -> Result<ResponseEnvelope<Payout>> {
        let call = ApiCall::get(&["v1", "payouts", id, "unmask"]);
        self.client.execute(call, &self.options).await
    }

    pub async fn list(&self, params: &PayoutListParams) -> Result<PagedEnvelope<Payout>> {
        let call = ApiCall::get(&["v1", "payouts"]).query(params);
        self.client.execute(call, &self.options).await
    }
}
