use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

use crate::core::persistence::customer::customer_entity::CustomerEntity;

use super::customer_upsert_request::CustomerUpsertRequest;

/// Body of `PATCH /api/customers/{id}/`.
///
/// `phone` and `address` are nullable: an explicit `null` clears them, an
/// absent key keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerPatchRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub address: Option<Option<String>>,
}

impl CustomerPatchRequest {
    pub fn merge_onto(self, current: &CustomerEntity) -> CustomerUpsertRequest {
        CustomerUpsertRequest {
            name: Some(self.name.unwrap_or_else(|| current.name.clone())),
            email: Some(self.email.unwrap_or_else(|| current.email.clone())),
            phone: self.phone.unwrap_or_else(|| current.phone.clone()),
            address: self.address.unwrap_or_else(|| current.address.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn stored() -> CustomerEntity {
        CustomerEntity {
            id: 1,
            name: "Grace".into(),
            email: "grace@example.com".into(),
            phone: Some("+1-555-0100".into()),
            address: Some("1 Navy Way".into()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn absent_keys_keep_stored_values() {
        let patch: CustomerPatchRequest = serde_json::from_value(json!({"name": "Ada"})).unwrap();
        let merged = patch.merge_onto(&stored());
        assert_eq!(merged.name.as_deref(), Some("Ada"));
        assert_eq!(merged.phone.as_deref(), Some("+1-555-0100"));
        assert_eq!(merged.address.as_deref(), Some("1 Navy Way"));
    }

    #[test]
    fn null_clears_nullable_columns() {
        let patch: CustomerPatchRequest =
            serde_json::from_value(json!({"phone": null, "address": "2 Harbour St"})).unwrap();
        let merged = patch.merge_onto(&stored());
        assert_eq!(merged.phone, None);
        assert_eq!(merged.address.as_deref(), Some("2 Harbour St"));
    }
}
