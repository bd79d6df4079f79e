//! Conversation record and message types
//!
//! A Conversation stores its messages inside a wrapping document,
//! `{"messages": [...]}`, rather than as a bare top-level array.

use serde::{Deserialize, Serialize};

use crate::id::{CONVERSATION_PREFIX, generate_id, now_ms};
use crate::storage::HasId;

/// Role of the system instruction message
pub const ROLE_SYSTEM: &str = "system";

/// Role of messages written by the user
pub const ROLE_USER: &str = "user";

/// Role of messages written by the assistant
pub const ROLE_ASSISTANT: &str = "assistant";

/// A single role-tagged message
///
/// `role` is free-form; the `ROLE_*` constants are the conventional values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    /// Create a message with an arbitrary role
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ROLE_SYSTEM, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ROLE_USER, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ROLE_ASSISTANT, content)
    }
}

/// The persisted document wrapping a conversation's messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationDocument {
    pub messages: Vec<Message>,
}

/// The default document for a new conversation: `{"messages": []}`
pub fn empty_document() -> ConversationDocument {
    ConversationDocument::default()
}

/// A persisted, ordered list of role-tagged messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique identifier ("conv-1738300800123-a1b2")
    pub id: String,

    /// Wrapping document holding the messages
    #[serde(default = "empty_document")]
    pub stream: ConversationDocument,

    pub created_at: i64,
    pub updated_at: i64,
}

impl Conversation {
    /// Create an empty conversation
    pub fn new() -> Self {
        let now = now_ms();
        Self {
            id: generate_id(CONVERSATION_PREFIX),
            stream: empty_document(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a conversation seeded with the given messages
    pub fn with_messages(messages: Vec<Message>) -> Self {
        let mut conversation = Self::new();
        conversation.stream.messages = messages;
        conversation
    }

    /// Messages in chronological order
    pub fn messages(&self) -> &[Message] {
        &self.stream.messages
    }

    /// Mutable view of the messages; edits land directly in the document
    ///
    /// Prefer reading, modifying a copy and writing back with
    /// [`set_messages`](Self::set_messages) when replacing the whole list.
    pub fn messages_mut(&mut self) -> &mut Vec<Message> {
        self.touch();
        &mut self.stream.messages
    }

    /// Replace the document's message list wholesale
    pub fn set_messages(&mut self, messages: Vec<Message>) {
        self.stream.messages = messages;
        self.touch();
    }

    /// Append a message at the end of the conversation
    pub fn push(&mut self, message: Message) {
        self.stream.messages.push(message);
        self.touch();
    }

    /// The wrapping document
    pub fn stream(&self) -> &ConversationDocument {
        &self.stream
    }

    fn touch(&mut self) {
        self.updated_at = now_ms();
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl HasId for Conversation {
    fn id(&self) -> &str {
        &self.id
    }
}
