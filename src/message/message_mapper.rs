use crate::message::message_models::{MessageInfo, MessageWithRelations};

/// Turns loaded messages into their client-facing form.
pub trait MessageMapper: Send + Sync {
    fn project(&self, messages: Vec<MessageWithRelations>) -> Vec<MessageInfo>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MessageInfoMapper;

impl MessageMapper for MessageInfoMapper {
    fn project(&self, messages: Vec<MessageWithRelations>) -> Vec<MessageInfo> {
        messages.into_iter().map(MessageInfo::from).collect()
    }
}
