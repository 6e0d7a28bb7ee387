use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/bookings/`, `PUT /api/bookings/{id}/` and the public
/// `POST /api/booking/` form.
///
/// Existence of `room` and `customer`, date order and the computed
/// `total_price` need storage and are handled by `BookingService`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BookingUpsertRequest {
    pub customer: Option<i64>,

    #[validate(
        required(message = "This field is required."),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    pub customer_name: Option<String>,

    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address.")
    )]
    pub customer_email: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub room: Option<i64>,

    #[validate(required(message = "This field is required."))]
    pub check_in: Option<NaiveDate>,

    #[validate(required(message = "This field is required."))]
    pub check_out: Option<NaiveDate>,

    #[validate(range(min = 1, message = "Ensure this value is greater than or equal to 1."))]
    pub guests: Option<i64>,

    #[validate(range(min = 1, message = "Ensure this value is greater than or equal to 1."))]
    pub rooms: Option<i64>,

    /// Computed from the room rate when omitted.
    #[validate(range(min = 0.0, message = "Ensure this value is greater than or equal to 0."))]
    pub total_price: Option<f64>,
}
