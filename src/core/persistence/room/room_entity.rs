use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A bookable room as stored in `rooms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RoomEntity {
    pub id: i64,
    pub room_number: String,
    /// One of the values of `RoomType`.
    pub room_type: String,
    pub price_per_night: f64,
    pub capacity: i64,
    pub is_available: bool,
    pub description: String,
}

/// Column values for a row that has not been inserted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoom {
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub capacity: i64,
    pub is_available: bool,
    pub description: String,
}

impl NewRoom {
    pub fn with_id(self, id: i64) -> RoomEntity {
        RoomEntity {
            id,
            room_number: self.room_number,
            room_type: self.room_type,
            price_per_night: self.price_per_night,
            capacity: self.capacity,
            is_available: self.is_available,
            description: self.description,
        }
    }
}
