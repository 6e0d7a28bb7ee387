use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::core::persistence::contact::contact_message_entity::ContactMessageEntity;
use crate::core::persistence::contact::contact_message_repository_trait::ContactMessageRepository;
use crate::domain::common::error::DomainError;
use crate::domain::contact::dto::contact_message_request::ContactMessageRequest;

pub struct ContactService {
    repo: Arc<dyn ContactMessageRepository>,
}

impl ContactService {
    pub fn new(repo: Arc<dyn ContactMessageRepository>) -> Self {
        Self { repo }
    }

    pub async fn submit(&self, req: ContactMessageRequest) -> Result<ContactMessageEntity> {
        let draft = req.into_new_message().map_err(DomainError::Validation)?;
        let saved = self.repo.insert(&draft).await?;
        info!("Contact message {} received from {}", saved.id, saved.email);
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::testing::InMemoryContactMessages;
    use serde_json::json;

    #[tokio::test]
    async fn valid_message_is_stored() {
        let repo = Arc::new(InMemoryContactMessages::default());
        let svc = ContactService::new(repo.clone());

        svc.submit(
            serde_json::from_value(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Do you have parking?"
            }))
            .unwrap(),
        )
        .await
        .unwrap();

        let stored = repo.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].subject, "");
    }

    #[tokio::test]
    async fn blank_message_is_rejected_and_not_stored() {
        let repo = Arc::new(InMemoryContactMessages::default());
        let svc = ContactService::new(repo.clone());

        let err = svc
            .submit(
                serde_json::from_value(json!({
                    "name": "Ada",
                    "email": "nope",
                    "message": "   "
                }))
                .unwrap(),
            )
            .await
            .unwrap_err();

        match err.downcast::<DomainError>() {
            Ok(DomainError::Validation(errors)) => {
                assert!(errors.contains("email"));
                assert!(errors.contains("message"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(repo.list().await.unwrap().is_empty());
    }
}
