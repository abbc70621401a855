use crate::domain::enums::ApiEnum;
use crate::domain::models::common::{DeviceInfo, Metadata, StatusDetails};
use chrono::{DateTime, NaiveDate, Utc};

known_enum! {
    /// Lifecycle of a charge or payout.
    PaymentStatus { Created, Scheduled, Failed, Cancelled, OnHold, Pending, Paid, Reversed }
}

known_enum! {
    ConsentType { Internet, Signed }
}

known_enum! {
    BalanceCheck { Required, Enabled, Disabled }
}

known_enum! {
    /// Outcome the sandbox should force for a charge.
    ChargeSandboxOutcome {
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

raw_model! {
    pub struct ChargeConfig {
        required balance_check / set_balance_check: ApiEnum<BalanceCheck> = "balance_check";
        optional sandbox_outcome / set_sandbox_outcome: ApiEnum<ChargeSandboxOutcome> = "sandbox_outcome";
    }
}

raw_model! {
    /// A pull of funds from a customer's paykey.
    pub struct Charge {
        required id / set_id: String = "id";
        required amount / set_amount: i64 = "amount";
        required currency / set_currency: String = "currency";
        required description / set_description: String = "description";
        required consent_type / set_consent_type: ApiEnum<ConsentType> = "consent_type";
        required device / set_device: DeviceInfo = "device";
        required external_id / set_external_id: String = "external_id";
        required paykey / set_paykey: String = "paykey";
        required payment_date / set_payment_date: NaiveDate = "payment_date";
        required status / set_status: ApiEnum<PaymentStatus> = "status";
        nullable status_details / set_status_details: StatusDetails = "status_details";
        optional config / set_config: ChargeConfig = "config";
        nullable metadata / set_metadata: Metadata = "metadata";
        nullable funding_id / set_funding_id: String = "funding_id";
        nullable effective_at / set_effective_at: DateTime<Utc> = "effective_at";
        nullable paid_by / set_paid_by: String = "paid_by";
        required created_at / set_created_at: DateTime<Utc> = "created_at";
        nullable updated_at / set_updated_at: DateTime<Utc> = "updated_at";
    }
}

raw_model! {
    pub struct ChargeCreateParams {
        /// Amount in cents.
        required amount / set_amount: i64 = "amount";
        required currency / set_currency: String = "currency";
        required description / set_description: String = "description";
        required consent_type / set_consent_type: ApiEnum<ConsentType> = "consent_type";
        required device / set_device: DeviceInfo = "device";
        /// Your own identifier for the charge; must be unique per account.
        required external_id / set_external_id: String = "external_id";
        required paykey / set_paykey: String = "paykey";
        required payment_date / set_payment_date: NaiveDate = "payment_date";
        required config / set_config: ChargeConfig = "config";
        nullable metadata / set_metadata: Metadata = "metadata";
    }
}

raw_model! {
    pub struct ChargeUpdateParams {
        required amount / set_amount: i64 = "amount";
        required description / set_description: String = "description";
        required payment_date / set_payment_date: NaiveDate = "payment_date";
        nullable metadata / set_metadata: Metadata = "metadata";
    }
}

raw_model! {
    pub struct ChargeCancelParams {
        nullable reason / set_reason: String = "reason";
    }
}

raw_model! {
    pub struct ChargeHoldParams {
        nullable reason / set_reason: String = "reason";
    }
}

raw_model! {
    pub struct ChargeReleaseParams {
        nullable reason / set_reason: String = "reason";
    }
}
