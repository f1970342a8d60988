use async_trait::async_trait;

use crate::error::{AppError, Result};

/// Wire encoding of the conversation kind a message is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatType {
    Group,
    Private,
}

impl ChatType {
    pub const GROUP_CODE: i32 = 0;
    pub const PRIVATE_CODE: i32 = 1;
}

impl std::fmt::Display for ChatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatType::Group => write!(f, "Group"),
            ChatType::Private => write!(f, "Private"),
        }
    }
}

impl From<ChatType> for i32 {
    fn from(chat_type: ChatType) -> Self {
        match chat_type {
            ChatType::Group => ChatType::GROUP_CODE,
            ChatType::Private => ChatType::PRIVATE_CODE,
        }
    }
}

impl TryFrom<i32> for ChatType {
    type Error = AppError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            ChatType::GROUP_CODE => Ok(ChatType::Group),
            ChatType::PRIVATE_CODE => Ok(ChatType::Private),
            other => Err(AppError::Validation(format!("Unsupported chat type: {}", other))),
        }
    }
}

/// The single conversation a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentRef {
    Group(i32),
    Private(i32),
}

impl ParentRef {
    pub fn new(chat_type: ChatType, chat_id: i32) -> Self {
        match chat_type {
            ChatType::Group => ParentRef::Group(chat_id),
            ChatType::Private => ParentRef::Private(chat_id),
        }
    }

    pub fn chat_id(&self) -> i32 {
        match *self {
            ParentRef::Group(id) | ParentRef::Private(id) => id,
        }
    }

    pub fn chat_type(&self) -> ChatType {
        match self {
            ParentRef::Group(_) => ChatType::Group,
            ParentRef::Private(_) => ChatType::Private,
        }
    }

    pub fn group_id(&self) -> Option<i32> {
        match *self {
            ParentRef::Group(id) => Some(id),
            ParentRef::Private(_) => None,
        }
    }

    pub fn private_chat_id(&self) -> Option<i32> {
        match *self {
            ParentRef::Private(id) => Some(id),
            ParentRef::Group(_) => None,
        }
    }

    /// Rebuilds the reference from the two nullable storage columns.
    pub fn from_columns(group_id: Option<i32>, private_chat_id: Option<i32>) -> Option<Self> {
        match (group_id, private_chat_id) {
            (Some(id), None) => Some(ParentRef::Group(id)),
            (None, Some(id)) => Some(ParentRef::Private(id)),
            _ => None,
        }
    }
}

/// Lookup of one conversation variant by its key.
#[async_trait]
pub trait ConversationStore<C>: Send + Sync {
    async fn get_by_key(&self, id: i32) -> Result<Option<C>>;
}
