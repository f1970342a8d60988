pub mod private_chat_models;
pub mod private_chat_repository;

pub use private_chat_models::PrivateChat;
pub use private_chat_repository::PrivateChatRepository;
