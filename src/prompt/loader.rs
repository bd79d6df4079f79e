//! Snippet Loader - Read snippet text files from a directory
//!
//! Each `<name>.md` file in the directory is one snippet: the file stem is the
//! snippet name and the file content is the snippet content. Nothing is cached;
//! every call reads from disk.

use std::path::{Path, PathBuf};

use crate::error::{ChatseedError, Result};

/// Loads snippet files from a directory
pub struct SnippetLoader {
    /// Base directory containing snippet files
    snippets_dir: PathBuf,
}

impl SnippetLoader {
    /// Create a new SnippetLoader for the given directory
    pub fn new(snippets_dir: impl AsRef<Path>) -> Self {
        Self {
            snippets_dir: snippets_dir.as_ref().to_path_buf(),
        }
    }

    /// Load a snippet's content from disk
    ///
    /// # Arguments
    /// * `name` - The snippet name (without .md extension)
    pub fn load(&self, name: &str) -> Result<String> {
        let path = self.snippet_path(name);
        std::fs::read_to_string(&path).map_err(|e| {
            ChatseedError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to load snippet '{}' from {:?}: {}", name, path, e),
            ))
        })
    }

    /// Check if a snippet file exists on disk
    pub fn exists(&self, name: &str) -> bool {
        self.snippet_path(name).exists()
    }

    /// Get the full path for a snippet by name
    fn snippet_path(&self, name: &str) -> PathBuf {
        self.snippets_dir.join(format!("{}.md", name))
    }

    /// List all snippet names in the directory, sorted
    pub fn list_available(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.snippets_dir).map_err(|e| {
            ChatseedError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to read snippets directory {:?}: {}",
                    self.snippets_dir, e
                ),
            ))
        })?;

        let mut names = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file()
                && path.extension().is_some_and(|ext| ext == "md")
                && let Some(stem) = path.file_stem()
                && let Some(name) = stem.to_str()
            {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Load every snippet in the directory as `(name, content)` pairs, sorted by name
    pub fn load_all(&self) -> Result<Vec<(String, String)>> {
        let mut snippets = Vec::new();
        for name in self.list_available()? {
            let content = self.load(&name)?;
            snippets.push((name, content));
        }
        Ok(snippets)
    }

    /// Get the snippets directory path
    pub fn snippets_dir(&self) -> &Path {
        &self.snippets_dir
    }
}
