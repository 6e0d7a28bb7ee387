use serde::{Deserialize, Serialize};

use crate::core::persistence::room::room_entity::RoomEntity;

use super::room_upsert_request::RoomUpsertRequest;

/// Body of `PATCH /api/rooms/{id}/`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomPatchRequest {
    pub room_number: Option<String>,
    pub room_type: Option<String>,
    pub price_per_night: Option<f64>,
    pub capacity: Option<i64>,
    pub is_available: Option<bool>,
    pub description: Option<String>,
}

impl RoomPatchRequest {
    /// Overlays the patch on the stored row, producing a full payload that
    /// goes through the same validation as a replace.
    pub fn merge_onto(self, current: &RoomEntity) -> RoomUpsertRequest {
        RoomUpsertRequest {
            room_number: Some(self.room_number.unwrap_or_else(|| current.room_number.clone())),
            room_type: Some(self.room_type.unwrap_or_else(|| current.room_type.clone())),
            price_per_night: Some(self.price_per_night.unwrap_or(current.price_per_night)),
            capacity: Some(self.capacity.unwrap_or(current.capacity)),
            is_available: Some(self.is_available.unwrap_or(current.is_available)),
            description: Some(self.description.unwrap_or_else(|| current.description.clone())),
        }
    }
}
