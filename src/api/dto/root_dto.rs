use serde::Serialize;

pub const AVAILABLE_ROUTES: [&str; 5] = [
    "/api/rooms/",
    "/api/customers/",
    "/api/bookings/",
    "/api/contact/",
    "/api/booking/",
];

/// Payload of `GET /`.
#[derive(Serialize, Debug)]
pub struct RootResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub available_routes: Vec<&'static str>,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            status: "success",
            message: "Welcome to the Hotel Management API 🚀",
            available_routes: AVAILABLE_ROUTES.to_vec(),
        }
    }
}

/// `{"message": ...}` acknowledgement returned by the form endpoints.
#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: &'static str,
}
