use anyhow::Result;
use chrono::NaiveDate;
use httpmock::prelude::*;
use serde_json::json;
use straddle::models::{
    BalanceCheck, ChargeCancelParams, ChargeConfig, ChargeCreateParams, ConsentType, DeviceInfo,
    PaymentStatus, PayoutListParams, PayoutSortBy, SortOrder,
};
use straddle::{ClientConfig, RawModel, RequestOptions, StraddleClient, StraddleError};

fn client_for(server: &MockServer) -> Result<StraddleClient> {
    let mut config = ClientConfig::new("sk_test_integration");
    config.base_url = Some(server.base_url());
    config.timeout_seconds = 5;
    Ok(StraddleClient::new(config)?)
}

fn meta() -> serde_json::Value {
    json!({
        "api_request_id": "5b0b3a64-7b5b-4c0e-9c63-3a4e1b8f5e10",
        "api_request_timestamp": "2024-06-01T12:00:00Z"
    })
}

fn charge(status: &str) -> serde_json::Value {
    json!({
        "id": "ch_123",
        "amount": 10000,
        "currency": "USD",
        "description": "Monthly subscription",
        "consent_type": "internet",
        "device": { "ip_address": "192.168.1.1" },
        "external_id": "order-42",
        "paykey": "758c519d.02.c16f91",
        "payment_date": "2024-06-01",
        "status": status,
        "status_details": null,
        "created_at": "2024-06-01T12:00:00Z",
        "settlement_window": "next_day"
    })
}

#[tokio::test]
async fn test_create_charge_sends_headers_and_body() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/charges")
                .header("authorization", "Bearer sk_test_integration")
                .header("content-type", "application/json")
                .header("idempotency-key", "order-42-attempt-1")
                .header_exists("user-agent")
                .json_body(json!({
                    "amount": 10000,
                    "currency": "USD",
                    "description": "Monthly subscription",
                    "consent_type": "internet",
                    "device": { "ip_address": "192.168.1.1" },
                    "external_id": "order-42",
                    "paykey": "758c519d.02.c16f91",
                    "payment_date": "2024-06-01",
                    "config": { "balance_check": "enabled" },
                    "metadata": null
                }));
            then.status(201).json_body(json!({
                "meta": meta(),
                "response_type": "object",
                "data": charge("created")
            }));
        })
        .await;

    let client = client_for(&server)?;
    let mut device = DeviceInfo::new();
    device.set_ip_address("192.168.1.1");
    let mut config = ChargeConfig::new();
    config.set_balance_check(BalanceCheck::Enabled);
    let mut params = ChargeCreateParams::new();
    params
        .set_amount(10000)
        .set_currency("USD")
        .set_description("Monthly subscription")
        .set_consent_type(ConsentType::Internet)
        .set_device(device)
        .set_external_id("order-42")
        .set_paykey("758c519d.02.c16f91")
        .set_payment_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        .set_config(config)
        .set_metadata(None);

    let response = client
        .charges()
        .with_options(RequestOptions::new().with_idempotency_key("order-42-attempt-1"))
        .create(&params)
        .await?;

    mock.assert_async().await;
    let charge = response.data()?;
    assert_eq!(charge.id()?, "ch_123");
    assert_eq!(charge.status()?, PaymentStatus::Created);
    assert!(charge.status_details()?.is_none());
    assert_eq!(
        charge.additional_properties(),
        vec![("settlement_window", &json!("next_day"))]
    );
    Ok(())
}

#[tokio::test]
async fn test_cancel_charge_with_null_reason() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/v1/charges/abc/cancel")
                .json_body(json!({ "reason": null }));
            then.status(200).json_body(json!({
                "meta": meta(),
                "response_type": "object",
                "data": charge("cancelled")
            }));
        })
        .await;

    let client = client_for(&server)?;
    let mut params = ChargeCancelParams::new();
    params.set_reason(None);
    let charge = client.charges().cancel("abc", &params).await?.data()?;

    mock.assert_async().await;
    assert_eq!(charge.status()?, PaymentStatus::Cancelled);
    Ok(())
}

#[tokio::test]
async fn test_list_payouts_sends_query_and_reads_page() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/payouts")
                .query_param("page_size", "2")
                .query_param("sort_by", "amount")
                .query_param("sort_order", "desc");
            then.status(200).json_body(json!({
                "meta": {
                    "api_request_id": "req_9",
                    "api_request_timestamp": "2024-06-01T12:00:00Z",
                    "max_page_size": 1000,
                    "page_number": 1,
                    "page_size": 2,
                    "sort_by": "amount",
                    "sort_order": "desc",
                    "total_items": 40
                },
                "response_type": "array",
                "data": [
                    { "id": "po_1", "status": "paid" },
                    { "id": "po_2", "status": "returned_to_sender" }
                ]
            }));
        })
        .await;

    let client = client_for(&server)?;
    let mut params = PayoutListParams::new();
    params
        .set_page_size(Some(2))
        .set_sort_by(Some(PayoutSortBy::Amount.into()))
        .set_sort_order(Some(SortOrder::Desc.into()));
    let page = client.payouts().list(&params).await?;

    mock.assert_async().await;
    assert_eq!(page.meta()?.total_items()?, 40);
    let payouts = page.data()?;
    assert_eq!(payouts.len(), 2);
    assert_eq!(payouts[0].status()?, PaymentStatus::Paid);
    assert!(!payouts[1].status()?.is_known());
    assert_eq!(payouts[1].status()?.as_str(), "returned_to_sender");
    Ok(())
}

#[tokio::test]
async fn test_account_header_from_config() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/reports/total_customers_by_status")
                .header("straddle-account-id", "acct_embedded");
            then.status(200).json_body(json!({
                "meta": meta(),
                "response_type": "object",
                "data": { "inactive": 0, "pending": 1, "rejected": 2, "review": 3, "verified": 4 }
            }));
        })
        .await;

    let mut config = ClientConfig::new("sk_test_integration");
    config.base_url = Some(server.base_url());
    config.account_id = Some("acct_embedded".to_string());
    let client = StraddleClient::new(config)?;

    let report = client.reports().total_customers_by_status().await?.data()?;

    mock.assert_async().await;
    assert_eq!(report.total()?, 10);
    Ok(())
}

#[tokio::test]
async fn test_api_error_is_reported() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/customers/cus_missing");
            then.status(404).json_body(json!({
                "error": {
                    "status": 404,
                    "title": "Not Found",
                    "type": "not_found",
                    "detail": "Customer cus_missing was not found"
                },
                "meta": meta(),
                "response_type": "error"
            }));
        })
        .await;

    let client = client_for(&server)?;
    let error = client
        .customers()
        .get("cus_missing")
        .await
        .expect_err("404 must fail");

    assert_eq!(error.status(), Some(404));
    match error {
        StraddleError::Api { message, body, .. } => {
            assert_eq!(message, "Customer cus_missing was not found");
            assert!(body.contains("not_found"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_strict_client_rejects_incomplete_response() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/paykeys/pk_1");
            then.status(200).json_body(json!({
                "meta": meta(),
                "response_type": "object",
                "data": { "id": "pk_1" }
            }));
        })
        .await;

    let mut config = ClientConfig::new("sk_test_integration");
    config.base_url = Some(server.base_url());
    config.response_validation = true;
    let strict = StraddleClient::new(config)?;
    let result = strict.paykeys().get("pk_1").await;
    assert!(matches!(
        result,
        Err(StraddleError::MissingRequiredField { .. })
    ));

    let lenient = client_for(&server)?;
    let paykey = lenient.paykeys().get("pk_1").await?.data()?;
    assert_eq!(paykey.id()?, "pk_1");
    assert!(paykey.label().is_err());
    Ok(())
}
