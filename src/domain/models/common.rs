use crate::domain::enums::ApiEnum;
use crate::domain::raw::{RawFields, RawModel};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Free-form string metadata attached to most resources.
pub type Metadata = BTreeMap<String, String>;

known_enum! {
    ResponseType { Object, Array, Error, None }
}

known_enum! {
    SortOrder { Asc, Desc }
}

known_enum! {
    /// Why a resource is in its current status.
    StatusReason {
        InsufficientFunds,
        ClosedBankAccount,
        InvalidBankAccount,
        InvalidRouting,
        Disputed,
        PaymentStopped,
        OwnerDeceased,
        FrozenBankAccount,
        RiskReview,
        Fraudulent,
        DuplicateEntry,
        InvalidPaykey,
        PaymentBlocked,
        AmountTooLarge,
        TooManyAttempts,
        InternalSystemError,
        UserRequest,
        Ok,
        OtherNetworkReturn,
        PayoutRefused,
    }
}

known_enum! {
    StatusSource { Watchtower, BankDecline, CustomerDispute, UserAction, System }
}

raw_model! {
    pub struct ResponseMetadata {
        required api_request_id / set_api_request_id: String = "api_request_id";
        required api_request_timestamp / set_api_request_timestamp: DateTime<Utc> = "api_request_timestamp";
    }
}

raw_model! {
    /// Metadata of a list response. Only one page is returned per call.
    pub struct PagedResponseMetadata {
        required api_request_id / set_api_request_id: String = "api_request_id";
        required api_request_timestamp / set_api_request_timestamp: DateTime<Utc> = "api_request_timestamp";
        required max_page_size / set_max_page_size: i64 = "max_page_size";
        required page_number / set_page_number: i64 = "page_number";
        required page_size / set_page_size: i64 = "page_size";
        required total_items / set_total_items: i64 = "total_items";
        optional sort_by / set_sort_by: String = "sort_by";
        optional sort_order / set_sort_order: ApiEnum<SortOrder> = "sort_order";
    }
}

raw_model! {
    pub struct Address {
        required address1 / set_address1: String = "address1";
        nullable address2 / set_address2: String = "address2";
        required city / set_city: String = "city";
        required state / set_state: String = "state";
        required zip / set_zip: String = "zip";
    }
}

raw_model! {
    pub struct DeviceInfo {
        required ip_address / set_ip_address: String = "ip_address";
    }
}

raw_model! {
    pub struct StatusDetails {
        required message / set_message: String = "message";
        required reason / set_reason: ApiEnum<StatusReason> = "reason";
        required source / set_source: ApiEnum<StatusSource> = "source";
        required changed_at / set_changed_at: DateTime<Utc> = "changed_at";
        nullable code / set_code: String = "code";
    }
}

raw_model! {
    pub struct ErrorItem {
        required reference / set_reference: String = "reference";
        required detail / set_detail: String = "detail";
    }
}

raw_model! {
    pub struct ApiErrorDetail {
        required status / set_status: i64 = "status";
        required title / set_title: String = "title";
        required error_type / set_error_type: String = "type";
        nullable detail / set_detail: String = "detail";
        nullable items / set_items: Vec<ErrorItem> = "items";
    }
}

raw_model! {
    /// Body of a non-2xx response.
    pub struct ErrorResponse {
        required error / set_error: ApiErrorDetail = "error";
        optional meta / set_meta: ResponseMetadata = "meta";
        optional response_type / set_response_type: ApiEnum<ResponseType> = "response_type";
    }
}

impl ErrorResponse {
    /// Most specific human readable text the error carries.
    pub fn message(&self) -> Option<String> {
        let error = self.error().ok()?;
        error
            .detail()
            .ok()
            .flatten()
            .or_else(|| error.title().ok())
    }
}

/// `{ "meta": ..., "response_type": ..., "data": ... }` wrapper around every
/// successful response. `M` is the metadata model and `D` the payload type.
pub struct Envelope<M, D> {
    raw: RawFields,
    _types: PhantomData<fn() -> (M, D)>,
}

pub type ResponseEnvelope<T> = Envelope<ResponseMetadata, T>;

pub type PagedEnvelope<T> = Envelope<PagedResponseMetadata, Vec<T>>;

impl<M, D> Envelope<M, D>
where
    M: DeserializeOwned,
    D: DeserializeOwned,
{
    pub fn meta(&self) -> Result<M> {
        self.raw.required("meta")
    }

    pub fn response_type(&self) -> Result<ApiEnum<ResponseType>> {
        self.raw.required("response_type")
    }

    pub fn data(&self) -> Result<D> {
        self.raw.required("data")
    }
}

impl<M, D> RawModel for Envelope<M, D> {
    const FIELDS: &'static [&'static str] = &["meta", "response_type", "data"];

    fn raw(&self) -> &RawFields {
        &self.raw
    }

    fn raw_mut(&mut self) -> &mut RawFields {
        &mut self.raw
    }

    fn from_raw(raw: RawFields) -> Self {
        Self {
            raw,
            _types: PhantomData,
        }
    }
}

impl<M, D> Validate for Envelope<M, D>
where
    M: DeserializeOwned + Validate,
    D: DeserializeOwned + Validate,
{
    fn validate(&self) -> Result<()> {
        self.raw.validate_required::<M>("meta")?;
        self.raw.validate_required::<ApiEnum<ResponseType>>("response_type")?;
        self.raw.validate_required::<D>("data")
    }
}

impl<M, D> Clone for Envelope<M, D> {
    fn clone(&self) -> Self {
        Self::from_raw(self.raw.clone())
    }
}

impl<M, D> PartialEq for Envelope<M, D> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<M, D> Default for Envelope<M, D> {
    fn default() -> Self {
        Self::from_raw(RawFields::new())
    }
}

impl<M, D> fmt::Debug for Envelope<M, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope").field("raw", &self.raw).finish()
    }
}

impl<M, D> Serialize for Envelope<M, D> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de, M, D> Deserialize<'de> for Envelope<M, D> {
    fn deserialize<Dz>(deserializer: Dz) -> std::result::Result<Self, Dz::Error>
    where
        Dz: Deserializer<'de>,
    {
        RawFields::deserialize(deserializer).map(Self::from_raw)
    }
}
