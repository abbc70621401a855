use crate::utils::error::{Result, StraddleError};

raw_model! {
    /// Count of customers in each status.
    pub struct CustomersByStatusReport {
        required inactive / set_inactive: i64 = "inactive";
        required pending / set_pending: i64 = "pending";
        required rejected / set_rejected: i64 = "rejected";
        required review / set_review: i64 = "review";
        required verified / set_verified: i64 = "verified";
    }
}

impl CustomersByStatusReport {
    /// Sum of all buckets. Fails instead of wrapping when the counts overflow.
    pub fn total(&self) -> Result<i64> {
        let buckets = [
            self.inactive()?,
            self.pending()?,
            self.rejected()?,
            self.review()?,
            self.verified()?,
        ];
        buckets
            .into_iter()
            .try_fold(0i64, i64::checked_add)
            .ok_or_else(|| StraddleError::Overflow {
                field: "total".to_string(),
            })
    }
}
