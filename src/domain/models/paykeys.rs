use crate::domain::enums::ApiEnum;
use crate::domain::models::common::{Metadata, SortOrder, StatusDetails};
use chrono::{DateTime, Utc};

known_enum! {
    PaykeyStatus { Pending, Active, Inactive, Rejected, Review, Blocked }
}

known_enum! {
    PaykeySource { BankAccount, Straddle, Mx, Plaid, Tan, Quiltt }
}

known_enum! {
    BankAccountType { Checking, Savings }
}

known_enum! {
    BalanceStatus { Pending, Completed, Failed }
}

known_enum! {
    PaykeySortBy { InstitutionName, ExpiresAt, CreatedAt }
}

raw_model! {
    pub struct BankData {
        required account_number / set_account_number: String = "account_number";
        required account_type / set_account_type: ApiEnum<BankAccountType> = "account_type";
        required routing_number / set_routing_number: String = "routing_number";
    }
}

raw_model! {
    pub struct PaykeyBalance {
        required status / set_status: ApiEnum<BalanceStatus> = "status";
        nullable account_balance / set_account_balance: i64 = "account_balance";
        nullable updated_at / set_updated_at: DateTime<Utc> = "updated_at";
    }
}

raw_model! {
    /// A tokenized bank account that charges and payouts move money through.
    pub struct Paykey {
        required id / set_id: String = "id";
        required customer_id / set_customer_id: String = "customer_id";
        required label / set_label: String = "label";
        required paykey / set_paykey: String = "paykey";
        required source / set_source: ApiEnum<PaykeySource> = "source";
        required status / set_status: ApiEnum<PaykeyStatus> = "status";
        nullable status_details / set_status_details: StatusDetails = "status_details";
        nullable bank_data / set_bank_data: BankData = "bank_data";
        nullable institution_name / set_institution_name: String = "institution_name";
        nullable balance / set_balance: PaykeyBalance = "balance";
        nullable expires_at / set_expires_at: DateTime<Utc> = "expires_at";
        nullable external_id / set_external_id: String = "external_id";
        nullable metadata / set_metadata: Metadata = "metadata";
        required created_at / set_created_at: DateTime<Utc> = "created_at";
        required updated_at / set_updated_at: DateTime<Utc> = "updated_at";
    }
}

raw_model! {
    pub struct PaykeyListParams {
        optional customer_id / set_customer_id: String = "customer_id";
        optional page_number / set_page_number: i64 = "page_number";
        optional page_size / set_page_size: i64 = "page_size";
        optional sort_by / set_sort_by: ApiEnum<PaykeySortBy> = "sort_by";
        optional sort_order / set_sort_order: ApiEnum<SortOrder> = "sort_order";
        optional source / set_source: Vec<ApiEnum<PaykeySource>> = "source";
        optional status / set_status: Vec<ApiEnum<PaykeyStatus>> = "status";
    }
}

raw_model! {
    pub struct PaykeyCancelParams {
        nullable reason / set_reason: String = "reason";
    }
}

raw_model! {
    pub struct BridgeInitializeParams {
        required customer_id / set_customer_id: String = "customer_id";
    }
}

raw_model! {
    pub struct BridgeToken {
        required bridge_token / set_bridge_token: String = "bridge_token";
    }
}

raw_model! {
    /// Links a bank account by raw account and routing numbers.
    pub struct BridgeBankAccountParams {
        required customer_id / set_customer_id: String = "customer_id";
        required account_number / set_account_number: String = "account_number";
        required routing_number / set_routing_number: String = "routing_number";
        required account_type / set_account_type: ApiEnum<BankAccountType> = "account_type";
        nullable external_id / set_external_id: String = "external_id";
        nullable metadata / set_metadata: Metadata = "metadata";
    }
}

raw_model! {
    pub struct BridgePlaidParams {
        required customer_id / set_customer_id: String = "customer_id";
        required plaid_token / set_plaid_token: String = "plaid_token";
        nullable external_id / set_external_id: String = "external_id";
        nullable metadata / set_metadata: Metadata = "metadata";
    }
}
