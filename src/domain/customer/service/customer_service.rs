use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::core::persistence::customer::customer_entity::CustomerEntity;
use crate::core::persistence::db::UniqueViolation;
use crate::core::persistence::customer::customer_repository_trait::CustomerRepository;
use crate::domain::common::error::DomainError;
use crate::domain::common::field_errors::FieldErrors;
use crate::domain::customer::dto::customer_patch_request::CustomerPatchRequest;
use crate::domain::customer::dto::customer_upsert_request::CustomerUpsertRequest;

const EMAIL_TAKEN: &str = "customer with this email already exists.";

pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<CustomerEntity>> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i64) -> Result<CustomerEntity> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("customer").into())
    }

    pub async fn create(&self, req: CustomerUpsertRequest) -> Result<CustomerEntity> {
        let draft = req.into_new_customer().map_err(DomainError::Validation)?;
        self.ensure_email_free(&draft.email, None).await?;

        let customer = self.repo.insert(&draft).await.map_err(email_conflict)?;
        debug!("Created customer {}", customer.id);
        Ok(customer)
    }

    pub async fn replace(&self, id: i64, req: CustomerUpsertRequest) -> Result<CustomerEntity> {
        self.get(id).await?;
        self.store(id, req).await
    }

    pub async fn patch(&self, id: i64, patch: CustomerPatchRequest) -> Result<CustomerEntity> {
        let current = self.get(id).await?;
        self.store(id, patch.merge_onto(&current)).await
    }

    /// Bookings that pointed at the customer keep their row with `customer = null`.
    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::NotFound("customer").into());
        }
        debug!("Deleted customer {id}");
        Ok(())
    }

    async fn store(&self, id: i64, req: CustomerUpsertRequest) -> Result<CustomerEntity> {
        let draft = req.into_new_customer().map_err(DomainError::Validation)?;
        self.ensure_email_free(&draft.email, Some(id)).await?;

        self.repo
            .update(&draft.with_id(id))
            .await
            .map_err(email_conflict)?
            .ok_or_else(|| DomainError::NotFound("customer").into())
    }

    async fn ensure_email_free(&self, email: &str, exclude_id: Option<i64>) -> Result<()> {
        if self.repo.email_taken(email, exclude_id).await? {
            return Err(email_taken());
        }
        Ok(())
    }
}

fn email_taken() -> anyhow::Error {
    let mut errors = FieldErrors::new();
    errors.add("email", EMAIL_TAKEN);
    DomainError::Validation(errors).into()
}

fn email_conflict(err: anyhow::Error) -> anyhow::Error {
    if err.is::<UniqueViolation>() {
        email_taken()
    } else {
        err
    }
}
