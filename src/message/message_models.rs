use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    conversation::{ChatType, ParentRef},
    group::Group,
    private_chat::PrivateChat,
    user::User,
};

/// A persisted message. Exactly one parent conversation by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub sender_id: String,
    pub parent: ParentRef,
}

impl Message {
    pub fn group_id(&self) -> Option<i32> {
        self.parent.group_id()
    }

    pub fn private_chat_id(&self) -> Option<i32> {
        self.parent.private_chat_id()
    }
}

/// A message that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub sender_id: String,
    pub parent: ParentRef,
}

/// Messages staged for a single commit.
#[derive(Debug, Default)]
pub struct MessageBatch {
    pending: Vec<NewMessage>,
}

impl MessageBatch {
    pub fn add(&mut self, message: NewMessage) {
        self.pending.push(message);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl IntoIterator for MessageBatch {
    type Item = NewMessage;
    type IntoIter = std::vec::IntoIter<NewMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.pending.into_iter()
    }
}

/// Validated input of the create path.
#[derive(Debug, Clone)]
pub struct CreateMessage {
    pub chat_id: i32,
    pub chat_type: ChatType,
    pub text: String,
}

/// A message with its sender and parent conversation loaded.
#[derive(Debug, Clone)]
pub struct MessageWithRelations {
    pub message: Message,
    pub sender: User,
    pub group: Option<Group>,
    pub private_chat: Option<PrivateChat>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageInfo {
    pub id: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub sender_id: String,
    pub sender_name: String,
    pub chat_id: i32,
    /// 0 = group, 1 = private
    pub chat_type: i32,
    /// Group name; absent for private chats.
    pub chat_name: Option<String>,
}

impl From<MessageWithRelations> for MessageInfo {
    fn from(details: MessageWithRelations) -> Self {
        let MessageWithRelations {
            message,
            sender,
            group,
            private_chat: _,
        } = details;

        Self {
            id: message.id,
            text: message.text,
            created_at: message.created_at,
            sender_id: message.sender_id,
            sender_name: sender.user_name,
            chat_id: message.parent.chat_id(),
            chat_type: message.parent.chat_type().into(),
            chat_name: group.map(|g| g.name),
        }
    }
}
