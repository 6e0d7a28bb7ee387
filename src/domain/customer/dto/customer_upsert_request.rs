use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::persistence::customer::customer_entity::NewCustomer;
use crate::domain::common::field_errors::{check_not_blank, validation_errors, FieldErrors};

/// Body of `POST /api/customers/` and `PUT /api/customers/{id}/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CustomerUpsertRequest {
    #[validate(
        required(message = "This field is required."),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address.")
    )]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "Ensure this field has no more than 20 characters."))]
    pub phone: Option<String>,

    pub address: Option<String>,
}

impl CustomerUpsertRequest {
    pub fn into_new_customer(self) -> Result<NewCustomer, FieldErrors> {
        let mut errors = validation_errors(&self);
        check_not_blank(&mut errors, "name", self.name.as_deref());
        check_not_blank(&mut errors, "email", self.email.as_deref());
        errors.into_result()?;

        Ok(NewCustomer {
            name: self.name.unwrap_or_default().trim().to_string(),
            email: self.email.unwrap_or_default().trim().to_string(),
            phone: self.phone.filter(|p| !p.trim().is_empty()),
            address: self.address.filter(|a| !a.trim().is_empty()),
            created_at: Utc::now(),
        })
    }
}
