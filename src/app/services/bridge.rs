use crate::core::client::StraddleClient;
use crate::core::request::{ApiCall, RequestOptions};
use crate::domain::models::{
    BridgeBankAccountParams, BridgeInitializeParams, BridgePlaidParams, BridgeToken, Paykey,
    ResponseEnvelope,
};
use crate::utils::error::Result;

/// Creates paykeys by linking a customer's bank account.
pub struct BridgeService<'a> {
    client: &'a StraddleClient,
    options: RequestOptions,
}

impl<'a> BridgeService<'a> {
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

    /// Token for the embedded bridge widget.
    pub async fn initialize(
        &self,
        params: &BridgeInitializeParams,
    ) -> Result<ResponseEnvelope<BridgeToken>> {
        let call = ApiCall::post(&["v1", "bridge", "initialize"]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn link_bank_account(
        &self,
        params: &BridgeBankAccountParams,
    ) -> Result<ResponseEnvelope<Paykey>> {
        let call = ApiCall::post(&["v1", "bridge", "bank_account"]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn link_plaid(&self, params: &BridgePlaidParams) -> Result<ResponseEnvelope<Paykey>> {
        let call = ApiCall::post(&["v1", "bridge", "plaid"]).body(params);
        self.client.execute(call, &self.options).await
    }
}
