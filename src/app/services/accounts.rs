use crate::core::client::StraddleClient;
use crate::core::request::{ApiCall, RequestOptions};
use crate::domain::models::{
    Account, AccountCreateParams, AccountListParams, AccountOnboardParams, AccountSimulateParams,
    AccountUpdateParams, PagedEnvelope, ResponseEnvelope,
};
use crate::utils::error::Result;

/// Embedded accounts of a platform.
pub struct AccountsService<'a> {
    client: &'a StraddleClient,
    options: RequestOptions,
}

impl<'a> AccountsService<'a> {
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

    pub async fn create(&self, params: &AccountCreateParams) -> Result<ResponseEnvelope<Account>> {
        let call = ApiCall::post(&["v1", "accounts"]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn get(&self, id: &str) -> Result<ResponseEnvelope<Account>> {
        let call = ApiCall::get(&["v1", "accounts", id]);
        self.client.execute(call, &self.options).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &AccountUpdateParams,
    ) -> Result<ResponseEnvelope<Account>> {
        let call = ApiCall::put(&["v1", "accounts", id]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn list(&self, params: &AccountListParams) -> Result<PagedEnvelope<Account>> {
        let call = ApiCall::get(&["v1", "accounts"]).query(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn onboard(
        &self,
        id: &str,
        params: &AccountOnboardParams,
    ) -> Result<ResponseEnvelope<Account>> {
        let call = ApiCall::post(&["v1", "accounts", id, "onboard"]).body(params);
        self.client.execute(call, &self.options).await
    }

    /// Sandbox only. Moves the account straight to `final_status`.
    pub async fn simulate(
        &self,
        id: &str,
        params: &AccountSimulateParams,
    ) -> Result<ResponseEnvelope<Account>> {
        let call = ApiCall::post(&["v1", "accounts", id, "simulate"]).query(params);
        self.client.execute(call, &self.options).await
    }
}
