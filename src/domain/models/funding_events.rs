use crate::domain::enums::ApiEnum;
use crate::domain::models::common::SortOrder;
use chrono::{DateTime, NaiveDate, Utc};

known_enum! {
    FundingEventType { ChargeDeposit, ChargeReversal, PayoutReturn, PayoutWithdrawal }
}

known_enum! {
    FundingDirection { Deposit, Withdrawal }
}

known_enum! {
    FundingEventSortBy { TransferDate, Id, Amount }
}

raw_model! {
    /// A settlement movement between Straddle and the platform's bank account.
    pub struct FundingEvent {
        required id / set_id: String = "id";
        required amount / set_amount: i64 = "amount";
        required direction / set_direction: ApiEnum<FundingDirection> = "direction";
        required event_type / set_event_type: ApiEnum<FundingEventType> = "event_type";
        required payment_count / set_payment_count: i64 = "payment_count";
        nullable trace_number / set_trace_number: String = "trace_number";
        optional trace_numbers / set_trace_numbers: Vec<String> = "trace_numbers";
        required transfer_date / set_transfer_date: NaiveDate = "transfer_date";
        required created_at / set_created_at: DateTime<Utc> = "created_at";
        required updated_at / set_updated_at: DateTime<Utc> = "updated_at";
    }
}

raw_model! {
    pub struct FundingEventListParams {
        optional created_from / set_created_from: NaiveDate = "created_from";
        optional created_to / set_created_to: NaiveDate = "created_to";
        optional direction / set_direction: ApiEnum<FundingDirection> = "direction";
        optional event_type / set_event_type: ApiEnum<FundingEventType> = "event_type";
        optional page_number / set_page_number: i64 = "page_number";
        optional page_size / set_page_size: i64 = "page_size";
        optional search_text / set_search_text: String = "search_text";
        optional sort_by / set_sort_by: ApiEnum<FundingEventSortBy> = "sort_by";
        optional sort_order / set_sort_order: ApiEnum<SortOrder> = "sort_order";
        optional trace_number / set_trace_number: String = "trace_number";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::raw::RawModel;
    use crate::utils::validation::Validate;
    use serde_json::json;

    #[test]
    fn test_funding_event() {
        let event: FundingEvent = serde_json::from_value(json!({
            "id": "fe_1",
            "amount": 250000,
            "direction": "deposit",
            "event_type": "charge_deposit",
            "payment_count": 12,
            "trace_number": null,
            "trace_numbers": ["091000010000001"],
            "transfer_date": "2024-03-04",
            "created_at": "2024-03-04T10:00:00Z",
            "updated_at": "2024-03-04T10:00:00Z"
        }))
        .unwrap();

        assert!(event.validate().is_ok());
        assert_eq!(event.event_type().unwrap(), FundingEventType::ChargeDeposit);
        assert_eq!(event.trace_numbers().unwrap().unwrap().len(), 1);
    }

    #[test]
    fn test_list_params() {
        let mut params = FundingEventListParams::new();
        params
            .set_direction(Some(FundingDirection::Withdrawal.into()))
            .set_created_from(NaiveDate::from_ymd_opt(2024, 3, 1));

        assert_eq!(
            params.raw().query_pairs(),
            vec![
                ("direction".to_string(), "withdrawal".to_string()),
                ("created_from".to_string(), "2024-03-01".to_string()),
            ]
        );
    }
}
