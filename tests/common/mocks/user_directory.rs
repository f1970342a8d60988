use async_trait::async_trait;
use chat_messages::error::Result;
use chat_messages::user::{User, UserDirectory};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MockUserDirectory {
    users: Mutex<HashMap<String, User>>,
}

impl MockUserDirectory {
    pub fn add_user(&self, user: User) {
        self.users
            .lock()
            .expect("users mutex poisoned")
            .insert(user.id.clone(), user);
    }

    pub fn get(&self, user_id: &str) -> Option<User> {
        self.users
            .lock()
            .expect("users mutex poisoned")
            .get(user_id)
            .cloned()
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.get(user_id))
    }
}
