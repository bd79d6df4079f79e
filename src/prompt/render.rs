//! Prompt Renderer - Two-pass rendering of templates with snippets and variables
//!
//! Rendered output is never re-scanned for placeholders, so a snippet whose
//! content references variables needs a second pass:
//!
//! 1. Snippet pass: bare `{{ name }}` placeholders naming a snippet are
//!    replaced by the snippet content verbatim. Every other byte of the
//!    template, including filtered expressions and `{% %}` blocks, is passed
//!    through unchanged so it is evaluated in the next pass.
//! 2. Variable pass: the intermediate text is rendered by the engine against
//!    the snippets merged with the variables, variables winning on key
//!    collisions.
//!
//! Depth is fixed at two. A variable value containing `{{ other }}` is emitted
//! as-is, and a snippet named inside another snippet's content is inserted
//! raw in the variable pass without being rendered again. A snippet used with
//! a filter (`{{ intro | upper }}`) is only seen by the variable pass, so the
//! placeholders in its content stay literal.
//!
//! Placeholders still unresolved after the variable pass render as the empty
//! string, the engine's lenient default. The engine runs once over the whole
//! text, so a single trailing newline is dropped.

use std::collections::HashMap;
use std::sync::LazyLock;

use minijinja::{AutoEscape, Environment};
use regex::{Captures, Regex};
use serde::Serialize;

use crate::error::{ChatseedError, Result};

/// Name/value pairs available to a render (snippet contents or caller variables)
pub type RenderMap = HashMap<String, String>;

/// A bare `{{ name }}` expression with no filters, tests or attribute access
static BARE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("Invalid Regex"));

/// Renders prompt templates using minijinja templating
pub struct PromptRenderer {
    env: Environment<'static>,
}

impl Default for PromptRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PromptRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptRenderer").finish_non_exhaustive()
    }
}

impl PromptRenderer {
    /// Create a new PromptRenderer with default settings
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Prompts are plain text, never HTML
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }

    /// Render a template in two passes: snippets first, then variables
    ///
    /// # Arguments
    /// * `template` - The template string containing `{{ name }}` placeholders
    /// * `variables` - Caller-supplied values; take precedence over snippets
    /// * `snippets` - Snippet name to content
    ///
    /// # Returns
    /// The rendered template as a string
    pub fn render(&self, template: &str, variables: &RenderMap, snippets: &RenderMap) -> Result<String> {
        let intermediate = self.expand_snippets(template, snippets)?;
        let context = merge_context(snippets, variables);
        self.render_with(&intermediate, &context)
    }

    /// Run the snippet pass only
    ///
    /// Anything that is not a bare placeholder naming a snippet is left untouched.
    pub fn expand_snippets(&self, template: &str, snippets: &RenderMap) -> Result<String> {
        let expanded = BARE_PLACEHOLDER.replace_all(template, |caps: &Captures| match snippets.get(&caps[1]) {
            Some(content) => content.clone(),
            None => caps[0].to_string(),
        });
        Ok(expanded.into_owned())
    }

    /// Render a template string once with any serializable context
    ///
    /// # Arguments
    /// * `template` - The template string containing `{{ name }}` placeholders
    /// * `context` - Any type that implements Serialize
    ///
    /// # Returns
    /// The rendered template as a string
    pub fn render_with<T: Serialize>(&self, template: &str, context: &T) -> Result<String> {
        let tmpl = self
            .env
            .template_from_str(template)
            .map_err(|e| ChatseedError::TemplateSyntax(e.to_string()))?;

        tmpl.render(context).map_err(|e| match e.kind() {
            minijinja::ErrorKind::SyntaxError => ChatseedError::TemplateSyntax(e.to_string()),
            _ => ChatseedError::Render(e.to_string()),
        })
    }
}

/// Build a new map from `base`, then overwrite or insert every key from `overrides`
pub fn merge_context(base: &RenderMap, overrides: &RenderMap) -> RenderMap {
    let mut merged = base.clone();
    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}
