use crate::core::client::StraddleClient;
use crate::core::request::{ApiCall, RequestOptions};
use crate::domain::models::{
    PagedEnvelope, Paykey, PaykeyCancelParams, PaykeyListParams, PaykeyReview,
    PaykeyReviewDecisionParams, ResponseEnvelope,
};
use crate::utils::error::Result;

pub struct PaykeysService<'a> {
    client: &'a StraddleClient,
    options: RequestOptions,
}

impl<'a> PaykeysService<'a> {
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

    pub async fn get(&self, id: &str) -> Result<ResponseEnvelope<Paykey>> {
        let call = ApiCall::get(&["v1", "paykeys", id]);
        self.client.execute(call, &self.options).await
    }

    pub async fn list(&self, params: &PaykeyListParams) -> Result<PagedEnvelope<Paykey>> {
        let call = ApiCall::get(&["v1", "paykeys"]).query(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn unmasked(&self, id: &str) -> Result<ResponseEnvelope<Paykey>> {
        let call = ApiCall::get(&["v1", "paykeys", id, "unmasked"]);
        self.client.execute(call, &self.options).await
    }

    pub async fn cancel(
        &self,
        id: &str,
        params: &PaykeyCancelParams,
    ) -> Result<ResponseEnvelope<Paykey>> {
        let call = ApiCall::put(&["v1", "paykeys", id, "cancel"]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn get_review(&self, id: &str) -> Result<ResponseEnvelope<PaykeyReview>> {
        let call = ApiCall::get(&["v1", "paykeys", id, "review"]);
        self.client.execute(call, &self.options).await
    }

    pub async fn review_decision(
        &self,
        id: &str,
        params: &PaykeyReviewDecisionParams,
    ) -> Result<ResponseEnvelope<Paykey>> {
        let call = ApiCall::patch(&["v1", "paykeys", id, "review"]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn refresh_review(&self, id: &str) -> Result<ResponseEnvelope<Paykey>> {
        let call = ApiCall::put(&["v1", "paykeys", id, "refresh_review"]);
        self.client.execute(call, &self.options).await
    }
}
