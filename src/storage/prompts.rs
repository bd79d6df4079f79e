//! Prompt-specific storage helpers.

use super::traits::{Filter, Storage};
use crate::domain::Prompt;
use crate::error::Result;

/// Collection name for prompts.
pub const PROMPTS_COLLECTION: &str = "prompts";

/// Helper for prompt-specific queries.
pub struct PromptStore<'a, S: Storage> {
    storage: &'a S,
}

impl<'a, S: Storage> PromptStore<'a, S> {
    /// Create a new PromptStore wrapping the given storage.
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Find a prompt by its exact name.
    pub fn get_by_name(&self, name: &str) -> Result<Option<Prompt>> {
        let mut found: Vec<Prompt> = self
            .storage
            .query(PROMPTS_COLLECTION, &[Filter::eq("name", name)])?;
        Ok(found.pop())
    }

    /// List all prompts.
    pub fn list_all(&self) -> Result<Vec<Prompt>> {
        self.storage.list(PROMPTS_COLLECTION)
    }

    /// Get a prompt by ID.
    pub fn get(&self, id: &str) -> Result<Option<Prompt>> {
        self.storage.get(PROMPTS_COLLECTION, id)
    }

    /// Create a new prompt. Fails if the name is taken.
    pub fn create(&self, record: &Prompt) -> Result<()> {
        self.storage.create(PROMPTS_COLLECTION, record)
    }

    /// Update an existing prompt.
    pub fn update(&self, record: &Prompt) -> Result<()> {
        self.storage.update(PROMPTS_COLLECTION, &record.id, record)
    }

    /// Delete a prompt.
    pub fn delete(&self, id: &str) -> Result<()> {
        self.storage.delete(PROMPTS_COLLECTION, id)
    }
}
