use crate::conversation::ConversationStore;
use crate::error::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use super::private_chat_models::PrivateChat;

#[derive(Clone)]
pub struct PrivateChatRepository {
    pool: PgPool,
}

impl PrivateChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationStore<PrivateChat> for PrivateChatRepository {
    async fn get_by_key(&self, id: i32) -> Result<Option<PrivateChat>> {
        let chat = sqlx::query_as::<_, PrivateChat>(
            "SELECT id, first_user_id, second_user_id, created_at
             FROM private_chats WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(chat)
    }
}
