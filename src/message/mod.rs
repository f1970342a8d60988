pub mod message_access;
pub mod message_dto;
pub mod message_handlers;
pub mod message_mapper;
pub mod message_models;
pub mod message_repository;
pub mod message_service;

pub use message_access::{AllowAll, ConversationAccess, ParticipantAccess};
pub use message_dto::{CreateMessageRequest, GetMessagesQuery};
pub use message_mapper::{MessageInfoMapper, MessageMapper};
pub use message_models::{
    CreateMessage, Message, MessageBatch, MessageInfo, MessageWithRelations, NewMessage,
};
pub use message_repository::{MessageRepository, MessageStore};
pub use message_service::MessageService;
