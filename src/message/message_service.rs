use std::sync::Arc;

use chrono::Utc;

use crate::{
    conversation::{ChatType, ConversationStore, ParentRef},
    error::{AppError, Result},
    group::Group,
    message::{
        message_access::{AllowAll, ConversationAccess},
        message_mapper::MessageMapper,
        message_models::{CreateMessage, MessageBatch, MessageInfo, NewMessage},
        message_repository::MessageStore,
    },
    private_chat::PrivateChat,
    user::UserDirectory,
};

const USER_NOT_FOUND: &str = "User not found";
const CHAT_NOT_FOUND: &str = "Chat not found";

#[derive(Clone)]
pub struct MessageService {
    users: Arc<dyn UserDirectory>,
    groups: Arc<dyn ConversationStore<Group>>,
    private_chats: Arc<dyn ConversationStore<PrivateChat>>,
    messages: Arc<dyn MessageStore>,
    mapper: Arc<dyn MessageMapper>,
    access: Arc<dyn ConversationAccess>,
}

impl MessageService {
    pub fn new(
        users: Arc<dyn UserDirectory>,
        groups: Arc<dyn ConversationStore<Group>>,
        private_chats: Arc<dyn ConversationStore<PrivateChat>>,
        messages: Arc<dyn MessageStore>,
        mapper: Arc<dyn MessageMapper>,
    ) -> Self {
        Self {
            users,
            groups,
            private_chats,
            messages,
            mapper,
            access: Arc::new(AllowAll),
        }
    }

    /// Replaces the read policy. Defaults to [`AllowAll`].
    pub fn with_access(mut self, access: Arc<dyn ConversationAccess>) -> Self {
        self.access = access;
        self
    }

    pub async fn create_message(&self, payload: CreateMessage, sender_id: &str) -> Result<()> {
        let parent = ParentRef::new(payload.chat_type, payload.chat_id);

        self.ensure_user_exists(sender_id).await?;
        self.ensure_chat_exists(parent).await?;

        let mut batch = MessageBatch::default();
        batch.add(NewMessage {
            text: payload.text,
            created_at: Utc::now(),
            sender_id: sender_id.to_string(),
            parent,
        });

        let saved = self.messages.save(batch).await?;

        for message in &saved {
            tracing::info!(
                message_id = message.id,
                chat_id = parent.chat_id(),
                chat_type = %parent.chat_type(),
                "Message created by {}",
                sender_id
            );
        }

        Ok(())
    }

    pub async fn get_messages(
        &self,
        sender_id: &str,
        chat_id: i32,
        chat_type: ChatType,
    ) -> Result<Vec<MessageInfo>> {
        let parent = ParentRef::new(chat_type, chat_id);

        self.ensure_user_exists(sender_id).await?;
        self.ensure_chat_exists(parent).await?;

        if !self.access.can_read(sender_id, parent).await? {
            tracing::warn!("User {} may not read {} chat {}", sender_id, chat_type, chat_id);
            return Err(AppError::Forbidden(
                "You are not a participant of this chat".to_string(),
            ));
        }

        let messages = self.messages.find_by_parent(parent).await?;
        tracing::debug!(
            "Loaded {} messages for {} chat {}",
            messages.len(),
            chat_type,
            chat_id
        );

        Ok(self.mapper.project(messages))
    }

    async fn ensure_user_exists(&self, user_id: &str) -> Result<()> {
        if self.users.find_by_id(user_id).await?.is_none() {
            tracing::warn!("User {} not found", user_id);
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }
        Ok(())
    }

    async fn ensure_chat_exists(&self, parent: ParentRef) -> Result<()> {
        let exists = match parent {
            ParentRef::Group(id) => self.groups.get_by_key(id).await?.is_some(),
            ParentRef::Private(id) => self.private_chats.get_by_key(id).await?.is_some(),
        };

        if !exists {
            tracing::warn!("{} chat {} not found", parent.chat_type(), parent.chat_id());
            return Err(AppError::NotFound(CHAT_NOT_FOUND.to_string()));
        }
        Ok(())
    }
}
