use async_trait::async_trait;
use chat_messages::error::Result;
use chat_messages::group::GroupMembership;
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Default)]
pub struct MockGroupMembership {
    members: Mutex<HashSet<(i32, String)>>,
}

impl MockGroupMembership {
    pub fn add_member(&self, group_id: i32, user_id: &str) {
        self.members
            .lock()
            .expect("members mutex poisoned")
            .insert((group_id, user_id.to_string()));
    }
}

#[async_trait]
impl GroupMembership for MockGroupMembership {
    async fn is_member(&self, group_id: i32, user_id: &str) -> Result<bool> {
        Ok(self
            .members
            .lock()
            .expect("members mutex poisoned")
            .contains(&(group_id, user_id.to_string())))
    }
}
