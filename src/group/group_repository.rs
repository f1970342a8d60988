use crate::conversation::ConversationStore;
use crate::error::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use super::group_models::Group;

/// Answers whether a user belongs to a group.
#[async_trait]
pub trait GroupMembership: Send + Sync {
    async fn is_member(&self, group_id: i32, user_id: &str) -> Result<bool>;
}

#[derive(Clone)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupMembership for GroupRepository {
    async fn is_member(&self, group_id: i32, user_id: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM group_members
             WHERE group_id = $1 AND user_id = $2"
        )
        .bind(group_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }
}

#[async_trait]
impl ConversationStore<Group> for GroupRepository {
    async fn get_by_key(&self, id: i32) -> Result<Option<Group>> {
        let group = sqlx::query_as::<_, Group>(
            "SELECT id, name, created_at FROM groups WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(group)
    }
}
