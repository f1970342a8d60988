use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    conversation::ChatType,
    error::Result,
    middleware::AuthUser,
    state::AppState,
    message::{
        message_dto::{CreateMessageRequest, GetMessagesQuery},
        message_models::CreateMessage,
    },
};

/// Post a message to a group or private chat
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message created"),
        (status = 400, description = "Invalid input or unsupported chat type"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User or chat not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_message(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: std::result::Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;
    let message = CreateMessage::try_from(payload)?;

    state
        .message_service
        .create_message(message, &user_id)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Get the full message history of a chat, oldest first
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "messages",
    params(GetMessagesQuery),
    responses(
        (status = 200, description = "Chat history", body = Vec<crate::message::message_models::MessageInfo>),
        (status = 400, description = "Unsupported chat type"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a participant of the chat"),
        (status = 404, description = "User or chat not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_messages(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    query: std::result::Result<Query<GetMessagesQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Query(query) = query?;
    let chat_type = ChatType::try_from(query.chat_type)?;

    let messages = state
        .message_service
        .get_messages(&user_id, query.chat_id, chat_type)
        .await?;

    Ok((StatusCode::OK, Json(messages)))
}
