pub mod booking_routes;
pub mod contact_routes;
pub mod customer_routes;
pub mod room_routes;
