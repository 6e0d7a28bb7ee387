use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::root_dto::MessageResponse;
use crate::api::util::json_body::JsonBody;
use crate::app_state::AppState;
use crate::domain::contact::dto::contact_message_request::ContactMessageRequest;
use crate::errors::AppError;

pub struct ContactController;

impl ContactController {
    pub async fn submit_contact_message(
        State(state): State<AppState>,
        JsonBody(payload): JsonBody<ContactMessageRequest>,
    ) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
        state.contact_service.submit(payload).await?;
        Ok((
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "Message received!",
            }),
        ))
    }
}
