//! Conversation-specific storage helpers.

use super::traits::Storage;
use crate::domain::Conversation;
use crate::error::Result;

/// Collection name for conversations.
pub const CONVERSATIONS_COLLECTION: &str = "conversations";

/// Helper for conversation persistence.
pub struct ConversationStore<'a, S: Storage> {
    storage: &'a S,
}

impl<'a, S: Storage> ConversationStore<'a, S> {
    /// Create a new ConversationStore wrapping the given storage.
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// List all conversations.
    pub fn list_all(&self) -> Result<Vec<Conversation>> {
        self.storage.list(CONVERSATIONS_COLLECTION)
    }

    /// Get a conversation by ID.
    pub fn get(&self, id: &str) -> Result<Option<Conversation>> {
        self.storage.get(CONVERSATIONS_COLLECTION, id)
    }

    /// Persist a new conversation.
    pub fn create(&self, record: &Conversation) -> Result<()> {
        self.storage.create(CONVERSATIONS_COLLECTION, record)
    }

    /// Persist changes to an existing conversation.
    pub fn update(&self, record: &Conversation) -> Result<()> {
        self.storage.update(CONVERSATIONS_COLLECTION, &record.id, record)
    }

    /// Delete a conversation.
    pub fn delete(&self, id: &str) -> Result<()> {
        self.storage.delete(CONVERSATIONS_COLLECTION, id)
    }
}
