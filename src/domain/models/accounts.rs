//! Embedded platform resources: accounts, their capability requests and the
//! organizations that own them.

use crate::domain::enums::ApiEnum;
use crate::domain::models::common::{Address, Metadata, SortOrder, StatusDetails};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

known_enum! {
    AccountStatus { Created, Onboarding, Active, Rejected, Inactive }
}

known_enum! {
    AccessLevel { Standard, Managed }
}

known_enum! {
    AccountKind { Business }
}

known_enum! {
    AgreementType { Embedded, Direct }
}

known_enum! {
    /// Target status for a sandbox account simulation.
    SimulatedStatus { Onboarding, Active }
}

known_enum! {
    CapabilityCategory { PaymentType, CustomerType, ConsentType }
}

known_enum! {
    CapabilityType { Charges, Payouts, Individuals, Businesses, SignedAgreement, Internet }
}

known_enum! {
    CapabilityStatus { Active, Inactive, InReview, Approved, Rejected }
}

raw_model! {
    pub struct BusinessProfile {
        required name / set_name: String = "name";
        required website / set_website: String = "website";
        nullable legal_name / set_legal_name: String = "legal_name";
        nullable tax_id / set_tax_id: String = "tax_id";
        nullable description / set_description: String = "description";
        nullable phone / set_phone: String = "phone";
        nullable use_case / set_use_case: String = "use_case";
        nullable address / set_address: Address = "address";
    }
}

raw_model! {
    pub struct Account {
        required id / set_id: String = "id";
        required organization_id / set_organization_id: String = "organization_id";
        required access_level / set_access_level: ApiEnum<AccessLevel> = "access_level";
        required account_type / set_account_type: ApiEnum<AccountKind> = "type";
        required status / set_status: ApiEnum<AccountStatus> = "status";
        nullable status_detail / set_status_detail: StatusDetails = "status_detail";
        required business_profile / set_business_profile: BusinessProfile = "business_profile";
        nullable external_id / set_external_id: String = "external_id";
        nullable metadata / set_metadata: Metadata = "metadata";
        required created_at / set_created_at: DateTime<Utc> = "created_at";
        nullable updated_at / set_updated_at: DateTime<Utc> = "updated_at";
    }
}

raw_model! {
    pub struct AccountCreateParams {
        required access_level / set_access_level: ApiEnum<AccessLevel> = "access_level";
        required account_type / set_account_type: ApiEnum<AccountKind> = "account_type";
        required business_profile / set_business_profile: BusinessProfile = "business_profile";
        required organization_id / set_organization_id: String = "organization_id";
        nullable external_id / set_external_id: String = "external_id";
        nullable metadata / set_metadata: Metadata = "metadata";
    }
}

raw_model! {
    pub struct AccountUpdateParams {
        required business_profile / set_business_profile: BusinessProfile = "business_profile";
        nullable external_id / set_external_id: String = "external_id";
        nullable metadata / set_metadata: Metadata = "metadata";
    }
}

raw_model! {
    pub struct AccountListParams {
        optional page_number / set_page_number: i64 = "page_number";
        optional page_size / set_page_size: i64 = "page_size";
        optional sort_by / set_sort_by: String = "sort_by";
        optional sort_order / set_sort_order: ApiEnum<SortOrder> = "sort_order";
        optional status / set_status: Vec<ApiEnum<AccountStatus>> = "status";
        optional search_text / set_search_text: String = "search_text";
    }
}

raw_model! {
    pub struct TermsOfService {
        required accepted_date / set_accepted_date: DateTime<Utc> = "accepted_date";
        required agreement_type / set_agreement_type: ApiEnum<AgreementType> = "agreement_type";
        nullable agreement_url / set_agreement_url: String = "agreement_url";
        nullable accepted_ip / set_accepted_ip: String = "accepted_ip";
        nullable accepted_user_agent / set_accepted_user_agent: String = "accepted_user_agent";
    }
}

raw_model! {
    pub struct AccountOnboardParams {
        required terms_of_service / set_terms_of_service: TermsOfService = "terms_of_service";
    }
}

raw_model! {
    /// Sent as query parameters.
    pub struct AccountSimulateParams {
        optional final_status / set_final_status: ApiEnum<SimulatedStatus> = "final_status";
    }
}

raw_model! {
    pub struct CapabilityRequest {
        required id / set_id: String = "id";
        required account_id / set_account_id: String = "account_id";
        required category / set_category: ApiEnum<CapabilityCategory> = "category";
        required capability_type / set_capability_type: ApiEnum<CapabilityType> = "type";
        required status / set_status: ApiEnum<CapabilityStatus> = "status";
        nullable settings / set_settings: BTreeMap<String, serde_json::Value> = "settings";
        required created_at / set_created_at: DateTime<Utc> = "created_at";
        required updated_at / set_updated_at: DateTime<Utc> = "updated_at";
    }
}

raw_model! {
    pub struct CapabilityToggle {
        required enable / set_enable: bool = "enable";
    }
}

raw_model! {
    /// Requested charge limits; amounts in cents.
    pub struct ChargeCapability {
        required enable / set_enable: bool = "enable";
        optional daily_amount / set_daily_amount: i64 = "daily_amount";
        optional max_amount / set_max_amount: i64 = "max_amount";
        optional monthly_amount / set_monthly_amount: i64 = "monthly_amount";
        optional monthly_count / set_monthly_count: i64 = "monthly_count";
    }
}

raw_model! {
    pub struct CapabilityRequestCreateParams {
        optional businesses / set_businesses: CapabilityToggle = "businesses";
        optional individuals / set_individuals: CapabilityToggle = "individuals";
        optional internet / set_internet: CapabilityToggle = "internet";
        optional signed_agreement / set_signed_agreement: CapabilityToggle = "signed_agreement";
        optional charges / set_charges: ChargeCapability = "charges";
        optional payouts / set_payouts: CapabilityToggle = "payouts";
    }
}

raw_model! {
    pub struct CapabilityRequestListParams {
        optional category / set_category: ApiEnum<CapabilityCategory> = "category";
        optional capability_type / set_capability_type: ApiEnum<CapabilityType> = "type";
        optional status / set_status: ApiEnum<CapabilityStatus> = "status";
        optional page_number / set_page_number: i64 = "page_number";
        optional page_size / set_page_size: i64 = "page_size";
        optional sort_by / set_sort_by: String = "sort_by";
        optional sort_order / set_sort_order: ApiEnum<SortOrder> = "sort_order";
    }
}

raw_model! {
    pub struct Organization {
        required id / set_id: String = "id";
        required name / set_name: String = "name";
        nullable external_id / set_external_id: String = "external_id";
        nullable metadata / set_metadata: Metadata = "metadata";
        required created_at / set_created_at: DateTime<Utc> = "created_at";
        required updated_at / set_updated_at: DateTime<Utc> = "updated_at";
    }
}

raw_model! {
    pub struct OrganizationCreateParams {
        required name / set_name: String = "name";
        nullable external_id / set_external_id: String = "external_id";
        nullable metadata / set_metadata: Metadata = "metadata";
    }
}

raw_model! {
    pub struct OrganizationListParams {
        optional page_number / set_page_number: i64 = "page_number";
        optional page_size / set_page_size: i64 = "page_size";
        optional sort_by / set_sort_by: String = "sort_by";
        optional sort_order / set_sort_order: ApiEnum<SortOrder> = "sort_order";
        optional name / set_name: String = "name";
        optional external_id / set_external_id: String = "external_id";
    }
}

impl TermsOfService {
    /// Day the terms were accepted, in UTC.
    pub fn accepted_on(&self) -> crate::utils::error::Result<NaiveDate> {
        Ok(self.accepted_date()?.date_naive())
    }
}
