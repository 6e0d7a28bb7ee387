use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::persistence::db::write_error;

use super::room_entity::{NewRoom, RoomEntity};
use super::room_repository_trait::RoomRepository;

pub struct SqliteRoomRepository {
    pool: SqlitePool,
}

impl SqliteRoomRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for SqliteRoomRepository {
    async fn list(&self) -> Result<Vec<RoomEntity>> {
        sqlx::query_as::<_, RoomEntity>("SELECT * FROM rooms ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list rooms")
    }

    async fn get(&self, id: i64) -> Result<Option<RoomEntity>> {
        sqlx::query_as::<_, RoomEntity>("SELECT * FROM rooms WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to load room {id}"))
    }

    async fn insert(&self, room: &NewRoom) -> Result<RoomEntity> {
        sqlx::query_as::<_, RoomEntity>(
            r#"
            INSERT INTO rooms (room_number, room_type, price_per_night, capacity, is_available, description)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&room.room_number)
        .bind(&room.room_type)
        .bind(room.price_per_night)
        .bind(room.capacity)
        .bind(room.is_available)
        .bind(&room.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "Failed to insert room"))
    }

    async fn update(&self, room: &RoomEntity) -> Result<Option<RoomEntity>> {
        sqlx::query_as::<_, RoomEntity>(
            r#"
            UPDATE rooms
            SET room_number = ?, room_type = ?, price_per_night = ?, capacity = ?,
                is_available = ?, description = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&room.room_number)
        .bind(&room.room_type)
        .bind(room.price_per_night)
        .bind(room.capacity)
        .bind(room.is_available)
        .bind(&room.description)
        .bind(room.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, format!("Failed to update room {}", room.id)))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to delete room {id}"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn room_number_taken(&self, room_number: &str, exclude_id: Option<i64>) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM rooms WHERE room_number = ? AND (? IS NULL OR id <> ?)",
        )
        .bind(room_number)
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to check room number")?;
        Ok(count > 0)
    }
}
