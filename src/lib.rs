//! chatseed - Reusable prompt templates rendered into persisted conversations
//!
//! Prompts pair a system instruction with an opening assistant message, both
//! written with `{{ name }}` placeholders. Snippets are named text fragments
//! that templates can reference and that may themselves reference variables.
//! Materializing a prompt renders both templates in two passes (snippets, then
//! variables) and stores the result as a new Conversation.

pub mod domain;
pub mod error;
pub mod id;
pub mod prompt;
pub mod storage;

pub use error::{ChatseedError, Result};
