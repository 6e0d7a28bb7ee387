use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Key used for errors that belong to the record as a whole.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";

/// Field name → human readable messages, serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.add(NON_FIELD_ERRORS, message);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Collects `validator` failures for `value`, empty when it is valid.
pub fn validation_errors<T: Validate>(value: &T) -> FieldErrors {
    value.validate().err().map(FieldErrors::from).unwrap_or_default()
}

/// Flags strings that are present but empty after trimming. The blank
/// message replaces whatever format errors the field already collected.
pub fn check_not_blank(errors: &mut FieldErrors, field: &str, value: Option<&str>) {
    if matches!(value, Some(v) if v.trim().is_empty()) {
        errors.0.insert(field.to_string(), vec![BLANK.to_string()]);
    }
}

/// Message for a reference to a row that does not exist.
pub fn missing_pk(id: i64) -> String {
    format!("Invalid pk \"{id}\" - object does not exist.")
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, messages.join(" "))?;
        }
        Ok(())
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, kind) in errors.errors() {
            let ValidationErrorsKind::Field(list) = kind else {
                continue;
            };
            let name: &str = field;
            let key = if name == "__all__" { NON_FIELD_ERRORS } else { name };
            for err in list {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({}).", err.code));
                out.add(key, message);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Validate)]
    struct Sample {
        #[validate(required(message = "This field is required."))]
        name: Option<String>,
        #[validate(range(min = 1, message = "Too small."))]
        count: Option<i64>,
    }

    #[test]
    fn validator_errors_become_flat_messages() {
        let sample = Sample {
            name: None,
            count: Some(0),
        };
        let errors: FieldErrors = sample.validate().unwrap_err().into();

        assert_eq!(errors.get("name"), Some(&["This field is required.".to_string()][..]));
        assert_eq!(errors.get("count"), Some(&["Too small.".to_string()][..]));
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Enter a valid email address.");
        errors.add_non_field("Check-out must be after check-in.");

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({
                "email": ["Enter a valid email address."],
                "non_field_errors": ["Check-out must be after check-in."]
            })
        );
    }

    #[test]
    fn blank_strings_are_flagged() {
        let mut errors = FieldErrors::new();
        check_not_blank(&mut errors, "name", Some("   "));
        check_not_blank(&mut errors, "email", Some("a@b.co"));
        check_not_blank(&mut errors, "phone", None);

        assert_eq!(errors.get("name"), Some(&[BLANK.to_string()][..]));
        assert!(!errors.contains("email"));
        assert!(!errors.contains("phone"));
    }

    #[test]
    fn blank_replaces_format_errors() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Enter a valid email address.");
        check_not_blank(&mut errors, "email", Some(""));

        assert_eq!(errors.get("email"), Some(&[BLANK.to_string()][..]));
    }

    #[test]
    fn into_result_fails_only_when_something_was_collected() {
        let mut errors = FieldErrors::new();
        errors.add("room", "first");
        errors.add("room", "second");

        assert_eq!(errors.get("room").unwrap().len(), 2);
        assert!(errors.into_result().is_err());
        assert!(FieldErrors::new().into_result().is_ok());
    }
}
