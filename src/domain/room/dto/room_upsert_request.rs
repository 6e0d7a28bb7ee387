use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::persistence::room::room_entity::NewRoom;
use crate::domain::common::field_errors::{check_not_blank, validation_errors, FieldErrors};
use crate::domain::room::room_type::RoomType;

/// Body of `POST /api/rooms/` and `PUT /api/rooms/{id}/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RoomUpsertRequest {
    #[validate(
        required(message = "This field is required."),
        length(max = 10, message = "Ensure this field has no more than 10 characters.")
    )]
    pub room_number: Option<String>,

    /// Must name a `RoomType`.
    #[validate(required(message = "This field is required."))]
    pub room_type: Option<String>,

    #[validate(
        required(message = "This field is required."),
        range(min = 0.0, message = "Ensure this value is greater than or equal to 0.")
    )]
    pub price_per_night: Option<f64>,

    #[validate(range(min = 1, message = "Ensure this value is greater than or equal to 1."))]
    pub capacity: Option<i64>,

    pub is_available: Option<bool>,

    pub description: Option<String>,
}

impl RoomUpsertRequest {
    /// Validates the payload and fills in defaults for optional columns.
    pub fn into_new_room(self) -> Result<NewRoom, FieldErrors> {
        let mut errors = validation_errors(&self);
        check_not_blank(&mut errors, "room_number", self.room_number.as_deref());
        if let Some(room_type) = self.room_type.as_deref() {
            if RoomType::parse(room_type).is_none() {
                errors.add("room_type", format!("\"{room_type}\" is not a valid choice."));
            }
        }
        errors.into_result()?;

        Ok(NewRoom {
            room_number: self.room_number.unwrap_or_default().trim().to_string(),
            room_type: self.room_type.unwrap_or_default(),
            price_per_night: self.price_per_night.unwrap_or_default(),
            capacity: self.capacity.unwrap_or(1),
            is_available: self.is_available.unwrap_or(true),
            description: self.description.unwrap_or_default(),
        })
    }
}
