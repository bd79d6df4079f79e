//! Prompt record
//!
//! A Prompt is a named pair of templates used to seed a new conversation: a
//! system instruction and an opening assistant message. Materializing a prompt
//! renders both through the two-pass renderer and persists the result as a new,
//! independent Conversation.

use log::info;
use serde::{Deserialize, Serialize};

use super::conversation::{Conversation, Message};
use crate::error::Result;
use crate::id::{PROMPT_PREFIX, generate_id, now_ms};
use crate::prompt::{PromptRenderer, RenderMap};
use crate::storage::{ConversationStore, HasId, SnippetStore, Storage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,

    /// Unique across all prompts (e.g. "customer_service_bot")
    pub name: String,

    /// Template for the system message, e.g. "You are {{ role }}"
    pub system_prompt: String,

    /// Template for the first assistant message
    pub first_message: String,

    pub created_at: i64,
    pub updated_at: i64,
}

impl Prompt {
    pub fn new(
        name: impl Into<String>,
        system_prompt: impl Into<String>,
        first_message: impl Into<String>,
    ) -> Self {
        let now = now_ms();
        Self {
            id: generate_id(PROMPT_PREFIX),
            name: name.into(),
            system_prompt: system_prompt.into(),
            first_message: first_message.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Render the opening `[system, assistant]` messages without touching storage
    pub fn render_messages(
        &self,
        renderer: &PromptRenderer,
        variables: &RenderMap,
        snippets: &RenderMap,
    ) -> Result<Vec<Message>> {
        let system = renderer.render(&self.system_prompt, variables, snippets)?;
        let first = renderer.render(&self.first_message, variables, snippets)?;
        Ok(vec![Message::system(system), Message::assistant(first)])
    }

    /// Create and persist a new Conversation from this prompt
    ///
    /// Snippets are read from storage on every call, so edits are visible to
    /// the next materialization. Nothing is persisted if rendering fails.
    pub fn materialize<S: Storage>(&self, storage: &S, variables: &RenderMap) -> Result<Conversation> {
        let snippets = SnippetStore::new(storage).as_map()?;
        let messages = self.render_messages(&PromptRenderer::new(), variables, &snippets)?;

        let conversation = Conversation::with_messages(messages);
        ConversationStore::new(storage).create(&conversation)?;

        info!(
            "Materialized prompt '{}' into conversation {} ({} snippets, {} variables)",
            self.name,
            conversation.id,
            snippets.len(),
            variables.len()
        );
        Ok(conversation)
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl HasId for Prompt {
    fn id(&self) -> &str {
        &self.id
    }

    fn unique_fields() -> &'static [&'static str] {
        &["name"]
    }
}
