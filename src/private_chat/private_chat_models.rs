use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A two-party conversation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PrivateChat {
    pub id: i32,
    pub first_user_id: String,
    pub second_user_id: String,
    pub created_at: DateTime<Utc>,
}

impl PrivateChat {
    pub fn has_participant(&self, user_id: &str) -> bool {
        self.first_user_id == user_id || self.second_user_id == user_id
    }
}
