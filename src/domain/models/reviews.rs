use crate::domain::enums::ApiEnum;
use crate::domain::models::customers::{Customer, CustomerStatus};
use crate::domain::models::paykeys::{Paykey, PaykeyStatus};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

known_enum! {
    ReviewDecision { Accept, Reject, Review }
}

known_enum! {
    /// Manual decision on a customer under review.
    CustomerReviewStatus { Verified, Rejected }
}

known_enum! {
    PaykeyReviewStatus { Active, Rejected }
}

raw_model! {
    /// One check of an identity review (email, phone, fraud, ...).
    pub struct ReviewCheck {
        required decision / set_decision: ApiEnum<ReviewDecision> = "decision";
        nullable risk_score / set_risk_score: f64 = "risk_score";
        nullable codes / set_codes: Vec<String> = "codes";
        nullable correlation / set_correlation: String = "correlation";
    }
}

raw_model! {
    pub struct IdentityDetails {
        required review_id / set_review_id: String = "review_id";
        required decision / set_decision: ApiEnum<ReviewDecision> = "decision";
        nullable reference_id / set_reference_id: String = "reference_id";
        nullable breakdown / set_breakdown: BTreeMap<String, ReviewCheck> = "breakdown";
        nullable messages / set_messages: BTreeMap<String, String> = "messages";
        required created_at / set_created_at: DateTime<Utc> = "created_at";
        required updated_at / set_updated_at: DateTime<Utc> = "updated_at";
    }
}

raw_model! {
    pub struct CustomerReview {
        required customer_details / set_customer_details: Customer = "customer_details";
        nullable identity_details / set_identity_details: IdentityDetails = "identity_details";
    }
}

raw_model! {
    pub struct VerificationDetails {
        required id / set_id: String = "id";
        required decision / set_decision: ApiEnum<ReviewDecision> = "decision";
        nullable breakdown / set_breakdown: BTreeMap<String, ReviewCheck> = "breakdown";
        nullable messages / set_messages: BTreeMap<String, String> = "messages";
        required created_at / set_created_at: DateTime<Utc> = "created_at";
        required updated_at / set_updated_at: DateTime<Utc> = "updated_at";
    }
}

raw_model! {
    pub struct PaykeyReview {
        required paykey_details / set_paykey_details: Paykey = "paykey_details";
        nullable verification_details / set_verification_details: VerificationDetails = "verification_details";
    }
}

raw_model! {
    pub struct CustomerReviewDecisionParams {
        required status / set_status: ApiEnum<CustomerReviewStatus> = "status";
    }
}

raw_model! {
    pub struct PaykeyReviewDecisionParams {
        required status / set_status: ApiEnum<PaykeyReviewStatus> = "status";
    }
}

impl CustomerReview {
    /// Status of the reviewed customer, if the payload carries one.
    pub fn customer_status(&self) -> Option<ApiEnum<CustomerStatus>> {
        self.customer_details().ok()?.status().ok()
    }
}

impl PaykeyReview {
    pub fn paykey_status(&self) -> Option<ApiEnum<PaykeyStatus>> {
        self.paykey_details().ok()?.status().ok()
    }
}
