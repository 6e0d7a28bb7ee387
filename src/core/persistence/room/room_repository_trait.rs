use anyhow::Result;
use async_trait::async_trait;

use super::room_entity::{NewRoom, RoomEntity};

/// Storage abstraction for rooms.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<RoomEntity>>;

    async fn get(&self, id: i64) -> Result<Option<RoomEntity>>;

    async fn insert(&self, room: &NewRoom) -> Result<RoomEntity>;

    /// Overwrites every column of an existing row. Returns `None` when the id is unknown.
    async fn update(&self, room: &RoomEntity) -> Result<Option<RoomEntity>>;

    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Whether another room (other than `exclude_id`) already uses `room_number`.
    async fn room_number_taken(&self, room_number: &str, exclude_id: Option<i64>) -> Result<bool>;
}
