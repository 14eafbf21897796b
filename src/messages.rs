use crate::assistant::AssistantReply;

/// Response messages from background operations
pub enum ResponseMessage {
    AssistantReply(AssistantReply),
}
