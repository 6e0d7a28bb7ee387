use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::persistence::contact::contact_message_entity::NewContactMessage;
use crate::domain::common::field_errors::{check_not_blank, validation_errors, FieldErrors};

/// Body of `POST /api/contact/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactMessageRequest {
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

    #[validate(length(max = 200, message = "Ensure this field has no more than 200 characters."))]
    pub subject: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub message: Option<String>,
}

impl ContactMessageRequest {
    pub fn into_new_message(self) -> Result<NewContactMessage, FieldErrors> {
        let mut errors = validation_errors(&self);
        check_not_blank(&mut errors, "name", self.name.as_deref());
        check_not_blank(&mut errors, "email", self.email.as_deref());
        check_not_blank(&mut errors, "message", self.message.as_deref());
        errors.into_result()?;

        Ok(NewContactMessage {
            name: self.name.unwrap_or_default().trim().to_string(),
            email: self.email.unwrap_or_default().trim().to_string(),
            subject: self.subject.unwrap_or_default().trim().to_string(),
            message: self.message.unwrap_or_default(),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::field_errors::BLANK;
    use serde_json::json;

    #[test]
    fn blank_email_reports_blank_not_format() {
        let req: ContactMessageRequest =
            serde_json::from_value(json!({"name": "Ada", "email": "", "message": "hi"})).unwrap();

        let errors = req.into_new_message().unwrap_err();
        assert_eq!(errors.get("email"), Some(&[BLANK.to_string()][..]));
    }
}
