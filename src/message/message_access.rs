use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    conversation::{ConversationStore, ParentRef},
    error::Result,
    group::GroupMembership,
    private_chat::PrivateChat,
};

/// Decides whether a user may read a conversation's history.
#[async_trait]
pub trait ConversationAccess: Send + Sync {
    async fn can_read(&self, user_id: &str, parent: ParentRef) -> Result<bool>;
}

/// Any existing user may read any existing conversation.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

#[async_trait]
impl ConversationAccess for AllowAll {
    async fn can_read(&self, _user_id: &str, _parent: ParentRef) -> Result<bool> {
        Ok(true)
    }
}

/// Only group members and the two private chat participants may read.
#[derive(Clone)]
pub struct ParticipantAccess {
    groups: Arc<dyn GroupMembership>,
    private_chats: Arc<dyn ConversationStore<PrivateChat>>,
}

impl ParticipantAccess {
    pub fn new(
        groups: Arc<dyn GroupMembership>,
        private_chats: Arc<dyn ConversationStore<PrivateChat>>,
    ) -> Self {
        Self {
            groups,
            private_chats,
        }
    }
}

#[async_trait]
impl ConversationAccess for ParticipantAccess {
    async fn can_read(&self, user_id: &str, parent: ParentRef) -> Result<bool> {
        match parent {
            ParentRef::Group(group_id) => self.groups.is_member(group_id, user_id).await,
            ParentRef::Private(chat_id) => Ok(self
                .private_chats
                .get_by_key(chat_id)
                .await?
                .is_some_and(|chat| chat.has_participant(user_id))),
        }
    }
}
