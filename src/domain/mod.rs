//! Domain types for chatseed
//!
//! - Snippet: a named reusable text fragment
//! - Prompt: a named pair of message templates that materializes into a Conversation
//! - Conversation: an ordered list of role-tagged messages in a wrapping document

pub mod conversation;
pub mod prompt;
pub mod snippet;

pub use conversation::{
    Conversation, ConversationDocument, Message, ROLE_ASSISTANT, ROLE_SYSTEM, ROLE_USER, empty_document,
};
pub use prompt::Prompt;
pub use snippet::Snippet;
