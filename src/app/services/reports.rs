use crate::core::client::StraddleClient;
use crate::core::request::{ApiCall, RequestOptions};
use crate::domain::models::{CustomersByStatusReport, ResponseEnvelope};
use crate::utils::error::Result;

pub struct ReportsService<'a> {
    client: &'a StraddleClient,
    options: RequestOptions,
}

impl<'a> ReportsService<'a> {
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

    pub async fn total_customers_by_status(
        &self,
    ) -> Result<ResponseEnvelope<CustomersByStatusReport>> {
        let call = ApiCall::post(&["v1", "reports", "total_customers_by_status"]);
        self.client.execute(call, &self.options).await
    }
}
