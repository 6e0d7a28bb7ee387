use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::persistence::db::write_error;

use super::customer_entity::{CustomerEntity, NewCustomer};
use super::customer_repository_trait::CustomerRepository;

pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    async fn list(&self) -> Result<Vec<CustomerEntity>> {
        sqlx::query_as::<_, CustomerEntity>("SELECT * FROM customers ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list customers")
    }

    async fn get(&self, id: i64) -> Result<Option<CustomerEntity>> {
        sqlx::query_as::<_, CustomerEntity>("SELECT * FROM customers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to load customer {id}"))
    }

    async fn insert(&self, customer: &NewCustomer) -> Result<CustomerEntity> {
        sqlx::query_as::<_, CustomerEntity>(
            r#"
            INSERT INTO customers (name, email, phone, address, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.address)
        .bind(customer.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "Failed to insert customer"))
    }

    async fn update(&self, customer: &CustomerEntity) -> Result<Option<CustomerEntity>> {
        sqlx::query_as::<_, CustomerEntity>(
            r#"
            UPDATE customers
            SET name = ?, email = ?, phone = ?, address = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.address)
        .bind(customer.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, format!("Failed to update customer {}", customer.id)))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to delete customer {id}"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn email_taken(&self, email: &str, exclude_id: Option<i64>) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM customers WHERE email = ? AND (? IS NULL OR id <> ?)",
        )
        .bind(email)
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to check customer email")?;
        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::db::{self, UniqueViolation};
    use chrono::Utc;

    fn customer(email: &str) -> NewCustomer {
        NewCustomer {
            name: "Ada".into(),
            email: email.into(),
            phone: None,
            address: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_a_typed_unique_violation() {
        let repo = SqliteCustomerRepository::new(db::connect_in_memory().await.unwrap());
        repo.insert(&customer("ada@example.com")).await.unwrap();

        let err = repo.insert(&customer("ada@example.com")).await.unwrap_err();
        assert!(err.is::<UniqueViolation>());

        let other = repo.insert(&customer("grace@example.com")).await.unwrap();
        let err = repo
            .update(&customer("ada@example.com").with_id(other.id))
            .await
            .unwrap_err();
        assert!(err.is::<UniqueViolation>());
    }
}
