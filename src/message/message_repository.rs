use crate::{
    conversation::ParentRef,
    error::{AppError, Result},
    group::Group,
    message::message_models::{Message, MessageBatch, MessageWithRelations},
    private_chat::PrivateChat,
    user::User,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

/// Persistence of messages: commit staged appends, list a conversation.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Persists every staged message atomically and returns the stored rows.
    async fn save(&self, batch: MessageBatch) -> Result<Vec<Message>>;

    /// All messages of one conversation, oldest first, ties broken by id.
    async fn find_by_parent(&self, parent: ParentRef) -> Result<Vec<MessageWithRelations>>;
}

#[derive(Debug, FromRow)]
struct MessageRow {
    id: i32,
    text: String,
    created_at: DateTime<Utc>,
    sender_id: String,
    group_id: Option<i32>,
    private_chat_id: Option<i32>,
}

impl TryFrom<MessageRow> for Message {
    type Error = AppError;

    fn try_from(row: MessageRow) -> Result<Self> {
        let parent = ParentRef::from_columns(row.group_id, row.private_chat_id).ok_or_else(|| {
            tracing::error!("Message {} does not reference exactly one chat", row.id);
            AppError::InternalError
        })?;

        Ok(Message {
            id: row.id,
            text: row.text,
            created_at: row.created_at,
            sender_id: row.sender_id,
            parent,
        })
    }
}

#[derive(Debug, FromRow)]
struct MessageDetailsRow {
    #[sqlx(flatten)]
    message: MessageRow,
    sender_user_name: String,
    sender_email: Option<String>,
    sender_created_at: DateTime<Utc>,
    group_name: Option<String>,
    group_created_at: Option<DateTime<Utc>>,
    private_chat_first_user_id: Option<String>,
    private_chat_second_user_id: Option<String>,
    private_chat_created_at: Option<DateTime<Utc>>,
}

impl TryFrom<MessageDetailsRow> for MessageWithRelations {
    type Error = AppError;

    fn try_from(row: MessageDetailsRow) -> Result<Self> {
        let message = Message::try_from(row.message)?;

        let sender = User {
            id: message.sender_id.clone(),
            user_name: row.sender_user_name,
            email: row.sender_email,
            created_at: row.sender_created_at,
        };

        let group = match (message.group_id(), row.group_name, row.group_created_at) {
            (Some(id), Some(name), Some(created_at)) => Some(Group { id, name, created_at }),
            _ => None,
        };

        let private_chat = match (
            message.private_chat_id(),
            row.private_chat_first_user_id,
            row.private_chat_second_user_id,
            row.private_chat_created_at,
        ) {
            (Some(id), Some(first_user_id), Some(second_user_id), Some(created_at)) => {
                Some(PrivateChat {
                    id,
                    first_user_id,
                    second_user_id,
                    created_at,
                })
            }
            _ => None,
        };

        Ok(MessageWithRelations {
            message,
            sender,
            group,
            private_chat,
        })
    }
}

const SELECT_MESSAGE_DETAILS: &str = "
    SELECT m.id, m.text, m.created_at, m.sender_id, m.group_id, m.private_chat_id,
           u.user_name AS sender_user_name,
           u.email AS sender_email,
           u.created_at AS sender_created_at,
           g.name AS group_name,
           g.created_at AS group_created_at,
           pc.first_user_id AS private_chat_first_user_id,
           pc.second_user_id AS private_chat_second_user_id,
           pc.created_at AS private_chat_created_at
    FROM messages m
    JOIN users u ON u.id = m.sender_id
    LEFT JOIN groups g ON g.id = m.group_id
    LEFT JOIN private_chats pc ON pc.id = m.private_chat_id";

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for MessageRepository {
    async fn save(&self, batch: MessageBatch) -> Result<Vec<Message>> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let mut saved = Vec::with_capacity(batch.len());
        let mut tx = self.pool.begin().await?;

        for message in batch {
            let row = sqlx::query_as::<_, MessageRow>(
                "INSERT INTO messages (text, created_at, sender_id, group_id, private_chat_id)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING id, text, created_at, sender_id, group_id, private_chat_id",
            )
            .bind(&message.text)
            .bind(message.created_at)
            .bind(&message.sender_id)
            .bind(message.parent.group_id())
            .bind(message.parent.private_chat_id())
            .fetch_one(&mut *tx)
            .await?;

            saved.push(Message::try_from(row)?);
        }

        tx.commit().await?;

        Ok(saved)
    }

    async fn find_by_parent(&self, parent: ParentRef) -> Result<Vec<MessageWithRelations>> {
        let filter = match parent {
            ParentRef::Group(_) => "WHERE m.group_id = $1",
            ParentRef::Private(_) => "WHERE m.private_chat_id = $1",
        };
        let query = format!(
            "{} {} ORDER BY m.created_at ASC, m.id ASC",
            SELECT_MESSAGE_DETAILS, filter
        );

        let rows = sqlx::query_as::<_, MessageDetailsRow>(&query)
            .bind(parent.chat_id())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(MessageWithRelations::try_from).collect()
    }
}
