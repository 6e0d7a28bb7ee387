use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A reservation of one room type for a date range.
///
/// `customer` and `room` hold the referenced ids; the JSON shape uses the
/// bare relation names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BookingEntity {
    pub id: i64,
    #[sqlx(rename = "customer_id")]
    pub customer: Option<i64>,
    pub customer_name: String,
    pub customer_email: String,
    #[sqlx(rename = "room_id")]
    pub room: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i64,
    pub rooms: i64,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub customer: Option<i64>,
    pub customer_name: String,
    pub customer_email: String,
    pub room: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i64,
    pub rooms: i64,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl NewBooking {
    pub fn with_id(self, id: i64) -> BookingEntity {
        BookingEntity {
            id,
            customer: self.customer,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            room: self.room,
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            rooms: self.rooms,
            total_price: self.total_price,
            created_at: self.created_at,
        }
    }
}
