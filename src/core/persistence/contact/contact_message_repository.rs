use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::contact_message_entity::{ContactMessageEntity, NewContactMessage};
use super::contact_message_repository_trait::ContactMessageRepository;

pub struct SqliteContactMessageRepository {
    pool: SqlitePool,
}

impl SqliteContactMessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactMessageRepository for SqliteContactMessageRepository {
    async fn insert(&self, message: &NewContactMessage) -> Result<ContactMessageEntity> {
        sqlx::query_as::<_, ContactMessageEntity>(
            r#"
            INSERT INTO contact_messages (name, email, subject, message, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.message)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert contact message")
    }

    async fn list(&self) -> Result<Vec<ContactMessageEntity>> {
        sqlx::query_as::<_, ContactMessageEntity>("SELECT * FROM contact_messages ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list contact messages")
    }
}
