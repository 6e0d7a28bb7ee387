use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CustomerEntity {
    pub id: i64,
    pub name: String,
    /// Unique across customers.
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewCustomer {
    pub fn with_id(self, id: i64) -> CustomerEntity {
        CustomerEntity {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            created_at: self.created_at,
        }
    }
}
