use crate::domain::enums::ApiEnum;
use crate::domain::models::charges::PaymentStatus;
use crate::domain::models::common::{DeviceInfo, Metadata, SortOrder, StatusDetails};
use chrono::{DateTime, NaiveDate, Utc};

known_enum! {
    PayoutSandboxOutcome {
        Standard,
        Paid,
        OnHold,
        CancelledForFraudRisk,
        CancelledForBalanceCheck,
        FailedInsufficientFunds,
        ReversedInsufficientFunds,
        FailedCustomerDispute,
        ReversedCustomerDispute,
        FailedClosedBankAccount,
        ReversedClosedBankAccount,
    }
}

known_enum! {
    PayoutSortBy { CreatedAt, PaymentDate, EffectiveAt, Id, Amount }
}

raw_model! {
    pub struct PayoutConfig {
        optional sandbox_outcome / set_sandbox_outcome: ApiEnum<PayoutSandboxOutcome> = "sandbox_outcome";
    }
}

raw_model! {
    /// A push of funds to a customer's paykey.
    pub struct Payout {
        required id / set_id: String = "id";
        required amount / set_amount: i64 = "amount";
        required currency / set_currency: String = "currency";
        required description / set_description: String = "description";
        required device / set_device: DeviceInfo = "device";
        required external_id / set_external_id: String = "external_id";
        required paykey / set_paykey: String = "paykey";
        required payment_date / set_payment_date: NaiveDate = "payment_date";
        required status / set_status: ApiEnum<PaymentStatus> = "status";
        nullable status_details / set_status_details: StatusDetails = "status_details";
        optional config / set_config: PayoutConfig = "config";
        nullable metadata / set_metadata: Metadata = "metadata";
        nullable funding_id / set_funding_id: String = "funding_id";
        nullable effective_at / set_effective_at: DateTime<Utc> = "effective_at";
        required created_at / set_created_at: DateTime<Utc> = "created_at";
        nullable updated_at / set_updated_at: DateTime<Utc> = "updated_at";
    }
}

raw_model! {
    pub struct PayoutCreateParams {
        required amount / set_amount: i64 = "amount";
        required currency / set_currency: String = "currency";
        required description / set_description: String = "description";
        required device / set_device: DeviceInfo = "device";
        required external_id / set_external_id: String = "external_id";
        required paykey / set_paykey: String = "paykey";
        required payment_date / set_payment_date: NaiveDate = "payment_date";
        optional config / set_config: PayoutConfig = "config";
        nullable metadata / set_metadata: Metadata = "metadata";
    }
}

raw_model! {
    pub struct PayoutUpdateParams {
        required amount / set_amount: i64 = "amount";
        required description / set_description: String = "description";
        required payment_date / set_payment_date: NaiveDate = "payment_date";
        nullable metadata / set_metadata: Metadata = "metadata";
    }
}

raw_model! {
    pub struct PayoutCancelParams {
        nullable reason / set_reason: String = "reason";
    }
}

raw_model! {
    pub struct PayoutHoldParams {
        nullable reason / set_reason: String = "reason";
    }
}

raw_model! {
    pub struct PayoutReleaseParams {
        nullable reason / set_reason: String = "reason";
    }
}

raw_model! {
    /// Query filters for `GET /v1/payouts`.
    pub struct PayoutListParams {
        optional page_number / set_page_number: i64 = "page_number";
        optional page_size / set_page_size: i64 = "page_size";
        optional sort_by / set_sort_by: ApiEnum<PayoutSortBy> = "sort_by";
        optional sort_order / set_sort_order: ApiEnum<SortOrder> = "sort_order";
        optional search_text / set_search_text: String = "search_text";
        optional status / set_status: Vec<ApiEnum<PaymentStatus>> = "status";
        optional customer_id / set_customer_id: String = "customer_id";
        optional paykey / set_paykey: String = "paykey";
        optional external_id / set_external_id: String = "external_id";
        optional funding_id / set_funding_id: String = "funding_id";
        optional min_amount / set_min_amount: i64 = "min_amount";
        optional max_amount / set_max_amount: i64 = "max_amount";
        optional min_payment_date / set_min_payment_date: NaiveDate = "min_payment_date";
        optional max_payment_date / set_max_payment_date: NaiveDate = "max_payment_date";
    }
}
