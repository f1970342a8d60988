use async_trait::async_trait;
use chat_messages::conversation::ParentRef;
use chat_messages::error::{AppError, Result};
use chat_messages::group::Group;
use chat_messages::message::{Message, MessageBatch, MessageStore, MessageWithRelations};
use chat_messages::private_chat::PrivateChat;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{MockConversationStore, MockUserDirectory};

/// In-memory message table that hydrates relations from the sibling mocks.
pub struct MockMessageStore {
    messages: Mutex<Vec<Message>>,
    next_id: AtomicUsize,
    save_calls: AtomicUsize,
    fail_saves: AtomicBool,
    users: Arc<MockUserDirectory>,
    groups: Arc<MockConversationStore<Group>>,
    private_chats: Arc<MockConversationStore<PrivateChat>>,
}

impl MockMessageStore {
    pub fn new(
        users: Arc<MockUserDirectory>,
        groups: Arc<MockConversationStore<Group>>,
        private_chats: Arc<MockConversationStore<PrivateChat>>,
    ) -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
            save_calls: AtomicUsize::new(0),
            fail_saves: AtomicBool::new(false),
            users,
            groups,
            private_chats,
        }
    }

    pub fn add_message(&self, message: Message) {
        self.messages
            .lock()
            .expect("messages mutex poisoned")
            .push(message);
    }

    pub fn all(&self) -> Vec<Message> {
        self.messages
            .lock()
            .expect("messages mutex poisoned")
            .clone()
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl MessageStore for MockMessageStore {
    async fn save(&self, batch: MessageBatch) -> Result<Vec<Message>> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }

        let saved: Vec<Message> = batch
            .into_iter()
            .map(|new_message| Message {
                id: self.next_id.fetch_add(1, Ordering::SeqCst) as i32,
                text: new_message.text,
                created_at: new_message.created_at,
                sender_id: new_message.sender_id,
                parent: new_message.parent,
            })
            .collect();

        self.messages
            .lock()
            .expect("messages mutex poisoned")
            .extend(saved.iter().cloned());

        Ok(saved)
    }

    async fn find_by_parent(&self, parent: ParentRef) -> Result<Vec<MessageWithRelations>> {
        let mut matching: Vec<Message> = self
            .all()
            .into_iter()
            .filter(|m| m.parent == parent)
            .collect();
        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        matching
            .into_iter()
            .map(|message| -> Result<MessageWithRelations> {
                let sender = self
                    .users
                    .get(&message.sender_id)
                    .ok_or(AppError::InternalError)?;
                let group = message.group_id().and_then(|id| self.groups.get(id));
                let private_chat = message
                    .private_chat_id()
                    .and_then(|id| self.private_chats.get(id));

                Ok(MessageWithRelations {
                    message,
                    sender,
                    group,
                    private_chat,
                })
            })
            .collect()
    }
}
