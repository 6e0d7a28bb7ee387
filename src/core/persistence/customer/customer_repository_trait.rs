use anyhow::Result;
use async_trait::async_trait;

use super::customer_entity::{CustomerEntity, NewCustomer};

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<CustomerEntity>>;

    async fn get(&self, id: i64) -> Result<Option<CustomerEntity>>;

    async fn insert(&self, customer: &NewCustomer) -> Result<CustomerEntity>;

    /// `created_at` is never rewritten. Returns `None` when the id is unknown.
    async fn update(&self, customer: &CustomerEntity) -> Result<Option<CustomerEntity>>;

    async fn delete(&self, id: i64) -> Result<bool>;

    async fn email_taken(&self, email: &str, exclude_id: Option<i64>) -> Result<bool>;
}
