//! Snippet record
//!
//! A snippet is a named, reusable text fragment that templates reference as
//! `{{ name }}`. Its content may itself contain variable placeholders.

use serde::{Deserialize, Serialize};

use crate::id::{SNIPPET_PREFIX, generate_id, now_ms};
use crate::storage::HasId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,

    /// Unique across all snippets, case-sensitive
    pub name: String,

    pub content: String,

    pub created_at: i64,
    pub updated_at: i64,
}

impl Snippet {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let now = now_ms();
        Self {
            id: generate_id(SNIPPET_PREFIX),
            name: name.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the content and bump `updated_at`
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.updated_at = now_ms();
    }
}

impl std::fmt::Display for Snippet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl HasId for Snippet {
    fn id(&self) -> &str {
        &self.id
    }

    fn unique_fields() -> &'static [&'static str] {
        &["name"]
    }
}
