use anyhow::Result;
use async_trait::async_trait;

use super::booking_entity::{BookingEntity, NewBooking};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Bookings matching every term, ordered by id. No terms means all bookings.
    ///
    /// A term matches when it is contained, ignoring ASCII case, in the
    /// customer's name, the room type, the check-in or the check-out date.
    async fn search(&self, terms: &[String]) -> Result<Vec<BookingEntity>>;

    async fn get(&self, id: i64) -> Result<Option<BookingEntity>>;

    async fn insert(&self, booking: &NewBooking) -> Result<BookingEntity>;

    async fn update(&self, booking: &BookingEntity) -> Result<Option<BookingEntity>>;

    async fn delete(&self, id: i64) -> Result<bool>;
}
