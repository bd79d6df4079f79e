//! Storage layer for chatseed - JSONL-backed persistence with in-memory caching.
//!
//! This module provides the storage abstraction for persisting Snippet, Prompt
//! and Conversation records. `JsonlStorage` keeps one `.jsonl` file per
//! collection and enforces each record type's unique fields at write time.

mod conversations;
mod jsonl;
mod prompts;
mod snippets;
mod traits;

pub use conversations::{CONVERSATIONS_COLLECTION, ConversationStore};
pub use jsonl::JsonlStorage;
pub use prompts::{PROMPTS_COLLECTION, PromptStore};
pub use snippets::{SNIPPETS_COLLECTION, SnippetStore};
pub use traits::{Filter, HasId, Storage};
