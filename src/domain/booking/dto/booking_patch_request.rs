use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

use crate::core::persistence::booking::booking_entity::BookingEntity;

use super::booking_upsert_request::BookingUpsertRequest;

/// Body of `PATCH /api/bookings/{id}/`.
///
/// `customer` distinguishes an absent key (keep) from an explicit `null` (detach).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingPatchRequest {
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub customer: Option<Option<i64>>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub room: Option<i64>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<i64>,
    pub rooms: Option<i64>,
    pub total_price: Option<f64>,
}

impl BookingPatchRequest {
    pub fn merge_onto(self, current: &BookingEntity) -> BookingUpsertRequest {
        BookingUpsertRequest {
            customer: self.customer.unwrap_or(current.customer),
            customer_name: Some(self.customer_name.unwrap_or_else(|| current.customer_name.clone())),
            customer_email: Some(
                self.customer_email
                    .unwrap_or_else(|| current.customer_email.clone()),
            ),
            room: Some(self.room.unwrap_or(current.room)),
            check_in: Some(self.check_in.unwrap_or(current.check_in)),
            check_out: Some(self.check_out.unwrap_or(current.check_out)),
            guests: Some(self.guests.unwrap_or(current.guests)),
            rooms: Some(self.rooms.unwrap_or(current.rooms)),
            total_price: Some(self.total_price.unwrap_or(current.total_price)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn stored() -> BookingEntity {
        BookingEntity {
            id: 1,
            customer: Some(3),
            customer_name: "Ada".into(),
            customer_email: "ada@example.com".into(),
            room: 2,
            check_in: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
            guests: 2,
            rooms: 1,
            total_price: 4500.0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn absent_customer_is_kept() {
        let patch: BookingPatchRequest = serde_json::from_value(json!({ "guests": 3 })).unwrap();
        let merged = patch.merge_onto(&stored());
        assert_eq!(merged.customer, Some(3));
        assert_eq!(merged.guests, Some(3));
    }

    #[test]
    fn null_customer_detaches() {
        let patch: BookingPatchRequest =
            serde_json::from_value(json!({ "customer": null })).unwrap();
        assert_eq!(patch.merge_onto(&stored()).customer, None);
    }
}
