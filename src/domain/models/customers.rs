use crate::domain::enums::ApiEnum;
use crate::domain::models::common::{Address, DeviceInfo, Metadata, SortOrder};
use chrono::{DateTime, NaiveDate, Utc};

known_enum! {
    CustomerType { Individual, Business }
}

known_enum! {
    CustomerStatus { Pending, Review, Verified, Inactive, Rejected }
}

known_enum! {
    ProcessingMethod { Inline, Background, Skip }
}

known_enum! {
    CustomerSandboxOutcome { Standard, Verified, Rejected, Review }
}

known_enum! {
    CustomerSortBy { Name, CreatedAt }
}

raw_model! {
    pub struct CustomerConfig {
        optional processing_method / set_processing_method: ApiEnum<ProcessingMethod> = "processing_method";
        optional sandbox_outcome / set_sandbox_outcome: ApiEnum<CustomerSandboxOutcome> = "sandbox_outcome";
    }
}

raw_model! {
    /// Identity data used for verification. Masked unless fetched through
    /// the `unmasked` endpoint.
    pub struct ComplianceProfile {
        nullable dob / set_dob: NaiveDate = "dob";
        nullable ssn / set_ssn: String = "ssn";
        nullable ein / set_ein: String = "ein";
        nullable legal_business_name / set_legal_business_name: String = "legal_business_name";
        nullable website / set_website: String = "website";
    }
}

raw_model! {
    pub struct Customer {
        required id / set_id: String = "id";
        required name / set_name: String = "name";
        required customer_type / set_customer_type: ApiEnum<CustomerType> = "type";
        required email / set_email: String = "email";
        required phone / set_phone: String = "phone";
        required status / set_status: ApiEnum<CustomerStatus> = "status";
        nullable external_id / set_external_id: String = "external_id";
        nullable address / set_address: Address = "address";
        nullable compliance_profile / set_compliance_profile: ComplianceProfile = "compliance_profile";
        optional config / set_config: CustomerConfig = "config";
        optional device / set_device: DeviceInfo = "device";
        nullable metadata / set_metadata: Metadata = "metadata";
        required created_at / set_created_at: DateTime<Utc> = "created_at";
        nullable updated_at / set_updated_at: DateTime<Utc> = "updated_at";
    }
}

raw_model! {
    pub struct CustomerCreateParams {
        required name / set_name: String = "name";
        required customer_type / set_customer_type: ApiEnum<CustomerType> = "type";
        required email / set_email: String = "email";
        required phone / set_phone: String = "phone";
        required device / set_device: DeviceInfo = "device";
        nullable external_id / set_external_id: String = "external_id";
        nullable address / set_address: Address = "address";
        nullable compliance_profile / set_compliance_profile: ComplianceProfile = "compliance_profile";
        optional config / set_config: CustomerConfig = "config";
        nullable metadata / set_metadata: Metadata = "metadata";
    }
}

raw_model! {
    pub struct CustomerUpdateParams {
        required name / set_name: String = "name";
        required email / set_email: String = "email";
        required phone / set_phone: String = "phone";
        required device / set_device: DeviceInfo = "device";
        required status / set_status: ApiEnum<CustomerStatus> = "status";
        nullable external_id / set_external_id: String = "external_id";
        nullable address / set_address: Address = "address";
        nullable compliance_profile / set_compliance_profile: ComplianceProfile = "compliance_profile";
        nullable metadata / set_metadata: Metadata = "metadata";
    }
}

raw_model! {
    pub struct CustomerListParams {
        optional page_number / set_page_number: i64 = "page_number";
        optional page_size / set_page_size: i64 = "page_size";
        optional sort_by / set_sort_by: ApiEnum<CustomerSortBy> = "sort_by";
        optional sort_order / set_sort_order: ApiEnum<SortOrder> = "sort_order";
        optional search_text / set_search_text: String = "search_text";
        optional name / set_name: String = "name";
        optional email / set_email: String = "email";
        optional external_id / set_external_id: String = "external_id";
        optional status / set_status: Vec<ApiEnum<CustomerStatus>> = "status";
        optional types / set_types: Vec<ApiEnum<CustomerType>> = "types";
        optional created_from / set_created_from: DateTime<Utc> = "created_from";
        optional created_to / set_created_to: DateTime<Utc> = "created_to";
    }
}
