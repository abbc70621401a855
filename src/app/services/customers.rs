use crate::core::client::StraddleClient;
use crate::core::request::{ApiCall, RequestOptions};
use crate::domain::models::{
    Customer, CustomerCreateParams, CustomerListParams, CustomerReview,
    CustomerReviewDecisionParams, CustomerUpdateParams, PagedEnvelope, ResponseEnvelope,
};
use crate::utils::error::Result;

pub struct CustomersService<'a> {
    client: &'a StraddleClient,
    options: RequestOptions,
}

impl<'a> CustomersService<'a> {
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

    pub async fn create(&self, params: &CustomerCreateParams) -> Result<ResponseEnvelope<Customer>> {
        let call = ApiCall::post(&["v1", "customers"]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn get(&self, id: &str) -> Result<ResponseEnvelope<Customer>> {
        let call = ApiCall::get(&["v1", "customers", id]);
        self.client.execute(call, &self.options).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &CustomerUpdateParams,
    ) -> Result<ResponseEnvelope<Customer>> {
        let call = ApiCall::put(&["v1", "customers", id]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn delete(&self, id: &str) -> Result<ResponseEnvelope<Customer>> {
        let call = ApiCall::delete(&["v1", "customers", id]);
        self.client.execute(call, &self.options).await
    }

    pub async fn list(&self, params: &CustomerListParams) -> Result<PagedEnvelope<Customer>> {
        let call = ApiCall::get(&["v1", "customers"]).query(params);
        self.client.execute(call, &self.options).await
    }

    /// Customer with PII such as SSN and date of birth in clear text.
    pub async fn unmasked(&self, id: &str) -> Result<ResponseEnvelope<Customer>> {
        let call = ApiCall::get(&["v1", "customers", id, "unmasked"]);
        self.client.execute(call, &self.options).await
    }

    pub async fn get_review(&self, id: &str) -> Result<ResponseEnvelope<CustomerReview>> {
        let call = ApiCall::get(&["v1", "customers", id, "review"]);
        self.client.execute(call, &self.options).await
    }

    pub async fn review_decision(
        &self,
        id: &str,
        params: &CustomerReviewDecisionParams,
    ) -> Result<ResponseEnvelope<Customer>> {
        let call = ApiCall::patch(&["v1", "customers", id, "review"]).body(params);
        self.client.execute(call, &self.options).await
    }

    pub async fn refresh_review(&self, id: &str) -> Result<ResponseEnvelope<Customer>> {
        let call = ApiCall::put(&["v1", "customers", id, "refresh_review"]);
        self.client.execute(call, &self.options).await
    }
}

#[cfg(test)]
mod tests {
    use crate::core::client::testing::*;
    use crate::domain::enums::ApiEnum;
    use crate::domain::models::{
        CustomerCreateParams, CustomerReviewDecisionParams, CustomerReviewStatus, CustomerStatus,
        CustomerType, DeviceInfo,
    };
    use crate::domain::raw::RawModel;
    use reqwest::header::CONTENT_TYPE;
    use reqwest::Method;
    use serde_json::json;

    fn customer_body() -> serde_json::Value {
        envelope(json!({
            "id": "cus_1",
            "name": "Ron Swanson",
            "type": "individual",
            "email": "ron@example.com",
            "phone": "+15555555555",
            "status": "verified",
            "created_at": "2024-06-01T00:00:00Z",
            "updated_at": "2024-06-01T00:00:00Z",
            "loyalty_tier": "gold"
        }))
    }

    #[tokio::test]
    async fn test_create_sends_body_with_content_type() {
        let transport = RecordingTransport::new(200, customer_body());
        let client = client_with(transport.clone());

        let mut device = DeviceInfo::new();
        device.set_ip_address("192.168.1.1");
        let mut params = CustomerCreateParams::new();
        params
            .set_name("Ron Swanson")
            .set_customer_type(ApiEnum::from(CustomerType::Individual))
            .set_email("ron@example.com")
            .set_phone("+15555555555")
            .set_device(device);

        let customer = client.customers().create(&params).await.unwrap().data().unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
        assert_eq!(request.body.as_ref().unwrap()["type"], "individual");
        assert_eq!(customer.status().unwrap(), CustomerStatus::Verified);
        assert_eq!(
            customer.additional_properties(),
            vec![("loyalty_tier", &json!("gold"))]
        );
    }

    #[tokio::test]
    async fn test_review_decision_uses_patch() {
        let transport = RecordingTransport::new(200, customer_body());
        let client = client_with(transport.clone());

        let mut params = CustomerReviewDecisionParams::new();
        params.set_status(ApiEnum::from(CustomerReviewStatus::Verified));
        client.customers().review_decision("cus_1", &params).await.unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(request.url.path(), "/v1/customers/cus_1/review");
        assert_eq!(request.body, Some(json!({ "status": "verified" })));
    }

    #[tokio::test]
    async fn test_delete_and_refresh_have_no_body() {
        let transport = RecordingTransport::new(200, customer_body());
        let client = client_with(transport.clone());

        client.customers().delete("cus_1").await.unwrap();
        assert_eq!(transport.last().method, Method::DELETE);
        assert!(transport.last().body.is_none());

        client.customers().refresh_review("cus_1").await.unwrap();
        let request = transport.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.url.path(), "/v1/customers/cus_1/refresh_review");
        assert!(request.headers.get(CONTENT_TYPE).is_none());
    }
}
