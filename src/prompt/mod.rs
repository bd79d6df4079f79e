//! Prompt System - Snippet loading and two-pass template rendering
//!
//! This module provides functionality for loading snippet files from disk
//! and rendering templates with snippets and variables using minijinja.

mod loader;
mod render;

pub use loader::SnippetLoader;
pub use render::{PromptRenderer, RenderMap, merge_context};
