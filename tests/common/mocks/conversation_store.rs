use async_trait::async_trait;
use chat_messages::conversation::ConversationStore;
use chat_messages::error::Result;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct MockConversationStore<C> {
    chats: Mutex<HashMap<i32, C>>,
    lookups: AtomicUsize,
}

impl<C> Default for MockConversationStore<C> {
    fn default() -> Self {
        Self {
            chats: Mutex::new(HashMap::new()),
            lookups: AtomicUsize::new(0),
        }
    }
}

impl<C: Clone> MockConversationStore<C> {
    pub fn insert(&self, id: i32, chat: C) {
        self.chats
            .lock()
            .expect("chats mutex poisoned")
            .insert(id, chat);
    }

    pub fn get(&self, id: i32) -> Option<C> {
        self.chats
            .lock()
            .expect("chats mutex poisoned")
            .get(&id)
            .cloned()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<C> ConversationStore<C> for MockConversationStore<C>
where
    C: Clone + Send + Sync,
{
    async fn get_by_key(&self, id: i32) -> Result<Option<C>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.get(id))
    }
}
