use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::core::persistence::db::UniqueViolation;
use crate::core::persistence::room::room_entity::RoomEntity;
use crate::core::persistence::room::room_repository_trait::RoomRepository;
use crate::domain::common::error::DomainError;
use crate::domain::common::field_errors::FieldErrors;
use crate::domain::room::dto::room_patch_request::RoomPatchRequest;
use crate::domain::room::dto::room_upsert_request::RoomUpsertRequest;

const ROOM_NUMBER_TAKEN: &str = "room with this room number already exists.";

pub struct RoomService {
    repo: Arc<dyn RoomRepository>,
}

impl RoomService {
    pub fn new(repo: Arc<dyn RoomRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<RoomEntity>> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i64) -> Result<RoomEntity> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("room").into())
    }

    pub async fn create(&self, req: RoomUpsertRequest) -> Result<RoomEntity> {
        let draft = req.into_new_room().map_err(DomainError::Validation)?;
        self.ensure_room_number_free(&draft.room_number, None).await?;

        let room = self.repo.insert(&draft).await.map_err(room_number_conflict)?;
        debug!("Created room {} ({})", room.id, room.room_number);
        Ok(room)
    }

    pub async fn replace(&self, id: i64, req: RoomUpsertRequest) -> Result<RoomEntity> {
        self.get(id).await?;
        self.store(id, req).await
    }

    pub async fn patch(&self, id: i64, patch: RoomPatchRequest) -> Result<RoomEntity> {
        let current = self.get(id).await?;
        self.store(id, patch.merge_onto(&current)).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::NotFound("room").into());
        }
        debug!("Deleted room {id}");
        Ok(())
    }

    async fn store(&self, id: i64, req: RoomUpsertRequest) -> Result<RoomEntity> {
        let draft = req.into_new_room().map_err(DomainError::Validation)?;
        self.ensure_room_number_free(&draft.room_number, Some(id)).await?;

        self.repo
            .update(&draft.with_id(id))
            .await
            .map_err(room_number_conflict)?
            .ok_or_else(|| DomainError::NotFound("room").into())
    }

    async fn ensure_room_number_free(&self, room_number: &str, exclude_id: Option<i64>) -> Result<()> {
        if self.repo.room_number_taken(room_number, exclude_id).await? {
            return Err(room_number_taken());
        }
        Ok(())
    }
}

fn room_number_taken() -> anyhow::Error {
    let mut errors = FieldErrors::new();
    errors.add("room_number", ROOM_NUMBER_TAKEN);
    DomainError::Validation(errors).into()
}

/// A concurrent writer can claim the number between the check and the write;
/// the UNIQUE index has the final say.
fn room_number_conflict(err: anyhow::Error) -> anyhow::Error {
    if err.is::<UniqueViolation>() {
        room_number_taken()
    } else {
        err
    }
}
