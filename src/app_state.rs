use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::auth::token_registry::TokenRegistry;
use crate::core::persistence::booking::booking_repository::SqliteBookingRepository;
use crate::core::persistence::contact::contact_message_repository::SqliteContactMessageRepository;
use crate::core::persistence::customer::customer_repository::SqliteCustomerRepository;
use crate::core::persistence::room::room_repository::SqliteRoomRepository;
use crate::domain::booking::service::booking_service::BookingService;
use crate::domain::contact::service::contact_service::ContactService;
use crate::domain::customer::service::customer_service::CustomerService;
use crate::domain::room::service::room_service::RoomService;

#[derive(Clone)]
pub struct AppState {
    pub room_service: Arc<RoomService>,
    pub customer_service: Arc<CustomerService>,
    pub booking_service: Arc<BookingService>,
    pub contact_service: Arc<ContactService>,
    pub tokens: Arc<TokenRegistry>,
}

pub fn build_app_state(pool: SqlitePool, tokens: TokenRegistry) -> AppState {
    let rooms = Arc::new(SqliteRoomRepository::new(pool.clone()));
    let customers = Arc::new(SqliteCustomerRepository::new(pool.clone()));
    let bookings = Arc::new(SqliteBookingRepository::new(pool.clone()));
    let contact_messages = Arc::new(SqliteContactMessageRepository::new(pool));

    AppState {
        room_service: Arc::new(RoomService::new(rooms.clone())),
        customer_service: Arc::new(CustomerService::new(customers.clone())),
        booking_service: Arc::new(BookingService::new(bookings, rooms, customers)),
        contact_service: Arc::new(ContactService::new(contact_messages)),
        tokens: Arc::new(tokens),
    }
}
