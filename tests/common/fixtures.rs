use chat_messages::group::Group;
use chat_messages::message::{MessageInfoMapper, MessageService, ParticipantAccess};
use chat_messages::private_chat::PrivateChat;
use chat_messages::user::User;
use chrono::{Duration, Utc};
use std::sync::Arc;

use super::mocks::{
    MockConversationStore, MockGroupMembership, MockMessageStore, MockUserDirectory,
};

pub fn test_user(id: &str) -> User {
    User {
        id: id.to_string(),
        user_name: format!("user-{}", id),
        email: Some(format!("{}@example.com", id)),
        created_at: Utc::now() - Duration::days(1),
    }
}

pub fn test_group(id: i32) -> Group {
    Group {
        id,
        name: format!("group-{}", id),
        created_at: Utc::now() - Duration::days(1),
    }
}

pub fn test_private_chat(id: i32, first_user_id: &str, second_user_id: &str) -> PrivateChat {
    PrivateChat {
        id,
        first_user_id: first_user_id.to_string(),
        second_user_id: second_user_id.to_string(),
        created_at: Utc::now() - Duration::days(1),
    }
}

pub struct TestContext {
    pub users: Arc<MockUserDirectory>,
    pub groups: Arc<MockConversationStore<Group>>,
    pub private_chats: Arc<MockConversationStore<PrivateChat>>,
    pub messages: Arc<MockMessageStore>,
    pub members: Arc<MockGroupMembership>,
    pub service: MessageService,
}

impl TestContext {
    pub fn new() -> Self {
        let users = Arc::new(MockUserDirectory::default());
        let groups = Arc::new(MockConversationStore::<Group>::default());
        let private_chats = Arc::new(MockConversationStore::<PrivateChat>::default());
        let messages = Arc::new(MockMessageStore::new(
            users.clone(),
            groups.clone(),
            private_chats.clone(),
        ));

        let service = MessageService::new(
            users.clone(),
            groups.clone(),
            private_chats.clone(),
            messages.clone(),
            Arc::new(MessageInfoMapper),
        );

        Self {
            users,
            groups,
            private_chats,
            messages,
            members: Arc::new(MockGroupMembership::default()),
            service,
        }
    }

    pub fn with_user(self, id: &str) -> Self {
        self.users.add_user(test_user(id));
        self
    }

    pub fn with_group(self, id: i32) -> Self {
        self.groups.insert(id, test_group(id));
        self
    }

    pub fn with_member(self, group_id: i32, user_id: &str) -> Self {
        self.members.add_member(group_id, user_id);
        self
    }

    /// Service that only lets group members and private chat participants read.
    pub fn participant_service(&self) -> MessageService {
        self.service.clone().with_access(Arc::new(ParticipantAccess::new(
            self.members.clone(),
            self.private_chats.clone(),
        )))
    }

    pub fn with_private_chat(self, id: i32, first_user_id: &str, second_user_id: &str) -> Self {
        self.private_chats
            .insert(id, test_private_chat(id, first_user_id, second_user_id));
        self
    }
}
