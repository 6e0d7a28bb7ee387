//! In-memory repositories used by the service unit tests.

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::persistence::booking::booking_entity::{BookingEntity, NewBooking};
use crate::core::persistence::booking::booking_repository_trait::BookingRepository;
use crate::core::persistence::contact::contact_message_entity::{
    ContactMessageEntity, NewContactMessage,
};
use crate::core::persistence::contact::contact_message_repository_trait::ContactMessageRepository;
use crate::core::persistence::customer::customer_entity::{CustomerEntity, NewCustomer};
use crate::core::persistence::customer::customer_repository_trait::CustomerRepository;
use crate::core::persistence::room::room_entity::{NewRoom, RoomEntity};
use crate::core::persistence::room::room_repository_trait::RoomRepository;

/// Rows plus the last id handed out.
struct Table<T> {
    rows: Vec<T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn replace(&mut self, id: i64, row: T, id_of: impl Fn(&T) -> i64) -> Option<T> {
        let slot = self.rows.iter_mut().find(|r| id_of(r) == id)?;
        *slot = row.clone();
        Some(row)
    }

    fn remove(&mut self, id: i64, id_of: impl Fn(&T) -> i64) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| id_of(r) != id);
        self.rows.len() != before
    }
}

#[derive(Default)]
pub struct InMemoryRooms {
    table: Mutex<Table<RoomEntity>>,
}

#[async_trait]
impl RoomRepository for InMemoryRooms {
    async fn list(&self) -> Result<Vec<RoomEntity>> {
        Ok(self.table.lock().unwrap().rows.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<RoomEntity>> {
        Ok(self.table.lock().unwrap().rows.iter().find(|r| r.id == id).cloned())
    }

    async fn insert(&self, room: &NewRoom) -> Result<RoomEntity> {
        let mut table = self.table.lock().unwrap();
        let row = room.clone().with_id(table.next_id());
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, room: &RoomEntity) -> Result<Option<RoomEntity>> {
        Ok(self.table.lock().unwrap().replace(room.id, room.clone(), |r| r.id))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.table.lock().unwrap().remove(id, |r| r.id))
    }

    async fn room_number_taken(&self, room_number: &str, exclude_id: Option<i64>) -> Result<bool> {
        Ok(self
            .table
            .lock()
            .unwrap()
            .rows
            .iter()
            .any(|r| r.room_number == room_number && Some(r.id) != exclude_id))
    }
}

#[derive(Default)]
pub struct InMemoryCustomers {
    table: Mutex<Table<CustomerEntity>>,
}

#[async_trait]
impl CustomerRepository for InMemoryCustomers {
    async fn list(&self) -> Result<Vec<CustomerEntity>> {
        Ok(self.table.lock().unwrap().rows.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<CustomerEntity>> {
        Ok(self.table.lock().unwrap().rows.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, customer: &NewCustomer) -> Result<CustomerEntity> {
        let mut table = self.table.lock().unwrap();
        let row = customer.clone().with_id(table.next_id());
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, customer: &CustomerEntity) -> Result<Option<CustomerEntity>> {
        let mut table = self.table.lock().unwrap();
        let Some(existing) = table.rows.iter().find(|c| c.id == customer.id) else {
            return Ok(None);
        };
        let row = CustomerEntity {
            created_at: existing.created_at,
            ..customer.clone()
        };
        Ok(table.replace(customer.id, row, |c| c.id))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.table.lock().unwrap().remove(id, |c| c.id))
    }

    async fn email_taken(&self, email: &str, exclude_id: Option<i64>) -> Result<bool> {
        Ok(self
            .table
            .lock()
            .unwrap()
            .rows
            .iter()
            .any(|c| c.email == email && Some(c.id) != exclude_id))
    }
}

/// Ignores search terms but records the last ones it was asked for.
#[derive(Default)]
pub struct InMemoryBookings {
    table: Mutex<Table<BookingEntity>>,
    pub last_terms: Mutex<Vec<String>>,
}

#[async_trait]
impl BookingRepository for InMemoryBookings {
    async fn search(&self, terms: &[String]) -> Result<Vec<BookingEntity>> {
        *self.last_terms.lock().unwrap() = terms.to_vec();
        Ok(self.table.lock().unwrap().rows.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<BookingEntity>> {
        Ok(self.table.lock().unwrap().rows.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, booking: &NewBooking) -> Result<BookingEntity> {
        let mut table = self.table.lock().unwrap();
        let row = booking.clone().with_id(table.next_id());
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, booking: &BookingEntity) -> Result<Option<BookingEntity>> {
        Ok(self.table.lock().unwrap().replace(booking.id, booking.clone(), |b| b.id))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.table.lock().unwrap().remove(id, |b| b.id))
    }
}

#[derive(Default)]
pub struct InMemoryContactMessages {
    table: Mutex<Table<ContactMessageEntity>>,
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactMessages {
    async fn insert(&self, message: &NewContactMessage) -> Result<ContactMessageEntity> {
        let mut table = self.table.lock().unwrap();
        let row = ContactMessageEntity {
            id: table.next_id(),
            name: message.name.clone(),
            email: message.email.clone(),
            subject: message.subject.clone(),
            message: message.message.clone(),
            created_at: message.created_at,
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<ContactMessageEntity>> {
        Ok(self.table.lock().unwrap().rows.clone())
    }
}
