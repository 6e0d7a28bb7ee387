use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::debug;

use crate::core::persistence::booking::booking_entity::{BookingEntity, NewBooking};
use crate::core::persistence::booking::booking_repository_trait::BookingRepository;
use crate::core::persistence::customer::customer_repository_trait::CustomerRepository;
use crate::core::persistence::room::room_repository_trait::RoomRepository;
use crate::domain::booking::dto::booking_patch_request::BookingPatchRequest;
use crate::domain::booking::dto::booking_upsert_request::BookingUpsertRequest;
use crate::domain::booking::search::search_terms;
use crate::domain::common::error::DomainError;
use crate::domain::common::field_errors::{check_not_blank, missing_pk, validation_errors};

pub const CHECK_OUT_BEFORE_CHECK_IN: &str = "Check-out must be after check-in.";

pub struct BookingService {
    bookings: Arc<dyn BookingRepository>,
    rooms: Arc<dyn RoomRepository>,
    customers: Arc<dyn CustomerRepository>,
}

impl BookingService {
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        rooms: Arc<dyn RoomRepository>,
        customers: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self {
            bookings,
            rooms,
            customers,
        }
    }

    /// All bookings, narrowed by a raw `?search=` value when one is given.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<BookingEntity>> {
        let terms = search.map(search_terms).unwrap_or_default();
        self.bookings.search(&terms).await
    }

    pub async fn get(&self, id: i64) -> Result<BookingEntity> {
        self.bookings
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("booking").into())
    }

    pub async fn create(&self, req: BookingUpsertRequest) -> Result<BookingEntity> {
        let draft = self.resolve(req).await?;
        let booking = self.bookings.insert(&draft).await?;
        debug!(
            "Booked room {} from {} to {} (booking {})",
            booking.room, booking.check_in, booking.check_out, booking.id
        );
        Ok(booking)
    }

    pub async fn replace(&self, id: i64, req: BookingUpsertRequest) -> Result<BookingEntity> {
        self.get(id).await?;
        self.store(id, req).await
    }

    pub async fn patch(&self, id: i64, patch: BookingPatchRequest) -> Result<BookingEntity> {
        let current = self.get(id).await?;
        self.store(id, patch.merge_onto(&current)).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.bookings.delete(id).await? {
            return Err(DomainError::NotFound("booking").into());
        }
        debug!("Deleted booking {id}");
        Ok(())
    }

    async fn store(&self, id: i64, req: BookingUpsertRequest) -> Result<BookingEntity> {
        let draft = self.resolve(req).await?;
        self.bookings
            .update(&draft.with_id(id))
            .await?
            .ok_or_else(|| DomainError::NotFound("booking").into())
    }

    /// Validates the payload against storage and builds the row to write.
    async fn resolve(&self, req: BookingUpsertRequest) -> Result<NewBooking> {
        let mut errors = validation_errors(&req);
        check_not_blank(&mut errors, "customer_name", req.customer_name.as_deref());
        check_not_blank(&mut errors, "customer_email", req.customer_email.as_deref());

        let nights = match (req.check_in, req.check_out) {
            (Some(check_in), Some(check_out)) if check_out <= check_in => {
                errors.add_non_field(CHECK_OUT_BEFORE_CHECK_IN);
                None
            }
            (Some(check_in), Some(check_out)) => Some((check_out - check_in).num_days()),
            _ => None,
        };

        let room = match req.room {
            Some(id) => {
                let room = self.rooms.get(id).await?;
                if room.is_none() {
                    errors.add("room", missing_pk(id));
                }
                room
            }
            None => None,
        };

        if let Some(id) = req.customer {
            if self.customers.get(id).await?.is_none() {
                errors.add("customer", missing_pk(id));
            }
        }

        errors.into_result().map_err(DomainError::Validation)?;

        let rooms = req.rooms.unwrap_or(1);
        let total_price = match (req.total_price, room.as_ref(), nights) {
            (Some(price), _, _) => price,
            (None, Some(room), Some(nights)) => room.price_per_night * nights as f64 * rooms as f64,
            _ => 0.0,
        };

        Ok(NewBooking {
            customer: req.customer,
            customer_name: req.customer_name.unwrap_or_default().trim().to_string(),
            customer_email: req.customer_email.unwrap_or_default().trim().to_string(),
            room: req.room.unwrap_or_default(),
            check_in: req.check_in.unwrap_or_default(),
            check_out: req.check_out.unwrap_or_default(),
            guests: req.guests.unwrap_or(1),
            rooms,
            total_price,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::customer::customer_entity::NewCustomer;
    use crate::core::persistence::room::room_entity::NewRoom;
    use crate::domain::common::field_errors::{FieldErrors, NON_FIELD_ERRORS};
    use crate::domain::testing::{InMemoryBookings, InMemoryCustomers, InMemoryRooms};
    use serde_json::json;

    struct Fixture {
        svc: BookingService,
        bookings: Arc<InMemoryBookings>,
        room_id: i64,
        customer_id: i64,
    }

    async fn fixture() -> Fixture {
        let bookings = Arc::new(InMemoryBookings::default());
        let rooms = Arc::new(InMemoryRooms::default());
        let customers = Arc::new(InMemoryCustomers::default());

        let room = rooms
            .insert(&NewRoom {
                room_number: "12".into(),
                room_type: "Deluxe".into(),
                price_per_night: 2000.0,
                capacity: 2,
                is_available: true,
                description: String::new(),
            })
            .await
            .unwrap();
        let customer = customers
            .insert(&NewCustomer {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                phone: None,
                address: None,
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        Fixture {
            svc: BookingService::new(bookings.clone(), rooms, customers),
            bookings,
            room_id: room.id,
            customer_id: customer.id,
        }
    }

    fn request(value: serde_json::Value) -> BookingUpsertRequest {
        serde_json::from_value(value).unwrap()
    }

    fn field_errors(err: anyhow::Error) -> FieldErrors {
        match err.downcast::<DomainError>() {
            Ok(DomainError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn total_price_is_computed_when_missing() {
        let f = fixture().await;
        let booking = f
            .svc
            .create(request(json!({
                "customer_name": "Ada",
                "customer_email": "ada@example.com",
                "room": f.room_id,
                "check_in": "2025-06-01",
                "check_out": "2025-06-04",
                "rooms": 2
            })))
            .await
            .unwrap();

        // 3 nights x 2 rooms x 2000
        assert_eq!(booking.total_price, 12000.0);
        assert_eq!(booking.guests, 1);
        assert_eq!(booking.customer, None);
    }

    #[tokio::test]
    async fn explicit_total_price_wins() {
        let f = fixture().await;
        let booking = f
            .svc
            .create(request(json!({
                "customer": f.customer_id,
                "customer_name": "Ada",
                "customer_email": "ada@example.com",
                "room": f.room_id,
                "check_in": "2025-06-01",
                "check_out": "2025-06-02",
                "guests": 2,
                "rooms": 1,
                "total_price": 1500.0
            })))
            .await
            .unwrap();

        assert_eq!(booking.total_price, 1500.0);
        assert_eq!(booking.customer, Some(f.customer_id));
    }

    #[tokio::test]
    async fn check_out_must_follow_check_in() {
        let f = fixture().await;
        let err = f
            .svc
            .create(request(json!({
                "customer_name": "Ada",
                "customer_email": "ada@example.com",
                "room": f.room_id,
                "check_in": "2025-06-04",
                "check_out": "2025-06-04"
            })))
            .await
            .unwrap_err();

        assert_eq!(
            field_errors(err).get(NON_FIELD_ERRORS),
            Some(&[CHECK_OUT_BEFORE_CHECK_IN.to_string()][..])
        );
    }

    #[tokio::test]
    async fn unknown_references_are_field_errors() {
        let f = fixture().await;
        let err = f
            .svc
            .create(request(json!({
                "customer": 404,
                "customer_name": "Ada",
                "customer_email": "ada@example.com",
                "room": 99,
                "check_in": "2025-06-01",
                "check_out": "2025-06-02"
            })))
            .await
            .unwrap_err();

        let errors = field_errors(err);
        assert_eq!(
            errors.get("room"),
            Some(&["Invalid pk \"99\" - object does not exist.".to_string()][..])
        );
        assert!(errors.contains("customer"));
    }

    #[tokio::test]
    async fn missing_fields_are_all_reported() {
        let f = fixture().await;
        let errors = field_errors(f.svc.create(request(json!({}))).await.unwrap_err());
        for field in ["customer_name", "customer_email", "room", "check_in", "check_out"] {
            assert!(errors.contains(field), "missing error for {field}");
        }
    }

    #[tokio::test]
    async fn list_passes_parsed_terms() {
        let f = fixture().await;
        f.svc.list(Some("Deluxe, Ada")).await.unwrap();
        assert_eq!(*f.bookings.last_terms.lock().unwrap(), vec!["Deluxe", "Ada"]);

        f.svc.list(None).await.unwrap();
        assert!(f.bookings.last_terms.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn patch_revalidates_merged_dates() {
        let f = fixture().await;
        let booking = f
            .svc
            .create(request(json!({
                "customer_name": "Ada",
                "customer_email": "ada@example.com",
                "room": f.room_id,
                "check_in": "2025-06-01",
                "check_out": "2025-06-03"
            })))
            .await
            .unwrap();

        let err = f
            .svc
            .patch(
                booking.id,
                serde_json::from_value(json!({"check_in": "2025-06-05"})).unwrap(),
            )
            .await
            .unwrap_err();
        assert!(field_errors(err).contains(NON_FIELD_ERRORS));

        let moved = f
            .svc
            .patch(
                booking.id,
                serde_json::from_value(json!({"check_out": "2025-06-06"})).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(moved.check_out.to_string(), "2025-06-06");
        // Stored price is kept on partial updates.
        assert_eq!(moved.total_price, booking.total_price);
    }

    #[tokio::test]
    async fn blank_customer_email_is_blank() {
        let f = fixture().await;
        let err = f
            .svc
            .create(request(json!({
                "customer_name": "Ada",
                "customer_email": "",
                "room": f.room_id,
                "check_in": "2025-06-01",
                "check_out": "2025-06-02"
            })))
            .await
            .unwrap_err();

        assert_eq!(
            field_errors(err).get("customer_email"),
            Some(&[crate::domain::common::field_errors::BLANK.to_string()][..])
        );
    }
}
