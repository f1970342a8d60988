use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    conversation::ChatType,
    error::AppError,
    message::message_models::CreateMessage,
};

#[derive(Clone, Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMessageRequest {
    pub chat_id: i32,
    /// 0 = group, 1 = private
    pub chat_type: i32,
    #[validate(length(min = 1))]
    pub text: String,
}

impl TryFrom<CreateMessageRequest> for CreateMessage {
    type Error = AppError;

    fn try_from(request: CreateMessageRequest) -> Result<Self, Self::Error> {
        Ok(CreateMessage {
            chat_id: request.chat_id,
            chat_type: ChatType::try_from(request.chat_type)?,
            text: request.text,
        })
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetMessagesQuery {
    pub chat_id: i32,
    /// 0 = group, 1 = private
    pub chat_type: i32,
}
