use crate::core::client::StraddleClient;
use crate::core::request::{ApiCall, RequestOptions};
use crate::domain::models::{
    Organization, OrganizationCreateParams, OrganizationListParams, PagedEnvelope,
    ResponseEnvelope,
};
use crate::utils::error::Result;

pub struct OrganizationsService<'a> {
    client: &'a StraddleClient,
    options: RequestOptions,
}

impl<'a> OrganizationsService<'a> {
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

    pub async fn create(
        &self,
        params: &OrganizationCreateParams,
    ) -> Result<ResponseEnvelope<Organization>> {
        let call = ApiCall::post(&["v1", "organizations"]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn get(&self, id: &str) -> Result<ResponseEnvelope<Organization>> {
        let call = ApiCall::get(&["v1", "organizations", id]);
        self.client.execute(call, &self.options).await
    }

    pub async fn list(
        &self,
        params: &OrganizationListParams,
    ) -> Result<PagedEnvelope<Organization>> {
        let call = ApiCall::get(&["v1", "organizations"]).query(params);
        self.client.execute(call, &self.options).await
    }
}

#[cfg(test)]
mod tests {
    use crate::core::client::testing::*;
    use crate::domain::models::OrganizationCreateParams;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_keeps_null_metadata() {
        let transport = RecordingTransport::new(
            200,
            envelope(json!({
                "id": "org_1",
                "name": "Pawnee",
                "external_id": null,
                "metadata": null,
                "created_at": "2024-06-01T00:00:00Z",
                "updated_at": "2024-06-01T00:00:00Z"
            })),
        );
        let client = client_with(transport.clone());

        let mut params = OrganizationCreateParams::new();
        params.set_name("Pawnee").set_metadata(None);
        let organization = client
            .organizations()
            .create(&params)
            .await
            .unwrap()
            .data()
            .unwrap();

        assert_eq!(
            transport.last().body,
            Some(json!({ "name": "Pawnee", "metadata": null }))
        );
        assert_eq!(organization.name().unwrap(), "Pawnee");
        assert!(organization.external_id().unwrap().is_none());
    }
}
