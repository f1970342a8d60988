pub mod conversation_store;
pub mod group_membership;
pub mod message_store;
pub mod user_directory;

pub use conversation_store::MockConversationStore;
pub use group_membership::MockGroupMembership;
pub use message_store::MockMessageStore;
pub use user_directory::MockUserDirectory;
