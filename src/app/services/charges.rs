use crate::core::client::StraddleClient;
use crate::core::request::{ApiCall, RequestOptions};
use crate::domain::models::{
    Charge, ChargeCancelParams, ChargeCreateParams, ChargeHoldParams, ChargeReleaseParams,
    ChargeUpdateParams, ResponseEnvelope,
};
use crate::utils::error::Result;

pub struct ChargesService<'a> {
    client: &'a StraddleClient,
    options: RequestOptions,
}

impl<'a> ChargesService<'a> {
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

    pub async fn create(&self, params: &ChargeCreateParams) -> Result<ResponseEnvelope<Charge>> {
        let call = ApiCall::post(&["v1", "charges"]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn get(&self, id: &str) -> Result<ResponseEnvelope<Charge>> {
        let call = ApiCall::get(&["v1", "charges", id]);
        self.client.execute(call, &self.options).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &ChargeUpdateParams,
    ) -> Result<ResponseEnvelope<Charge>> {
        let call = ApiCall::put(&["v1", "charges", id]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn cancel(
        &self,
        id: &str,
        params: &ChargeCancelParams,
    ) -> Result<ResponseEnvelope<Charge>> {
        let call = ApiCall::put(&["v1", "charges", id, "cancel"]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn hold(&self, id: &str, params: &ChargeHoldParams) -> Result<ResponseEnvelope<Charge>> {
        let call = ApiCall::put(&["v1", "charges", id, "hold"]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn release(
        &self,
        id: &str,
        params: &ChargeReleaseParams,
    ) -> Result<ResponseEnvelope<Charge>> {
        let call = ApiCall::put(&["v1", "charges", id, "release"]).body(params);
        self.client.execute(call, &self.options).await
    }

    /// Same charge with the bank details unmasked.
    pub async fn unmask(&self, id: &str) -> Result<ResponseEnvelope<Charge>> {
        let call = ApiCall::get(&["v1", "charges", id, "unmask"]);
        self.client.execute(call, &self.options).await
    }
}
