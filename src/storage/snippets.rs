//! Snippet-specific storage helpers.

use std::collections::HashMap;

use super::traits::{Filter, Storage};
use crate::domain::Snippet;
use crate::error::Result;

/// Collection name for snippets.
pub const SNIPPETS_COLLECTION: &str = "snippets";

/// Helper for snippet-specific queries.
pub struct SnippetStore<'a, S: Storage> {
    storage: &'a S,
}

impl<'a, S: Storage> SnippetStore<'a, S> {
    /// Create a new SnippetStore wrapping the given storage.
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Find a snippet by its exact name.
    pub fn get_by_name(&self, name: &str) -> Result<Option<Snippet>> {
        let mut found: Vec<Snippet> = self
            .storage
            .query(SNIPPETS_COLLECTION, &[Filter::eq("name", name)])?;
        Ok(found.pop())
    }

    /// All snippets as a name to content map.
    pub fn as_map(&self) -> Result<HashMap<String, String>> {
        Ok(self
            .list_all()?
            .into_iter()
            .map(|s| (s.name, s.content))
            .collect())
    }

    /// List all snippets.
    pub fn list_all(&self) -> Result<Vec<Snippet>> {
        self.storage.list(SNIPPETS_COLLECTION)
    }

    /// Get a snippet by ID.
    pub fn get(&self, id: &str) -> Result<Option<Snippet>> {
        self.storage.get(SNIPPETS_COLLECTION, id)
    }

    /// Create a new snippet. Fails if the name is taken.
    pub fn create(&self, record: &Snippet) -> Result<()> {
        self.storage.create(SNIPPETS_COLLECTION, record)
    }

    /// Update an existing snippet.
    pub fn update(&self, record: &Snippet) -> Result<()> {
        self.storage.update(SNIPPETS_COLLECTION, &record.id, record)
    }

    /// Delete a snippet.
    pub fn delete(&self, id: &str) -> Result<()> {
        self.storage.delete(SNIPPETS_COLLECTION, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChatseedError;
    use crate::storage::JsonlStorage;
    use tempfile::TempDir;

    fn create_test_storage() -> (JsonlStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonlStorage::new(temp_dir.path()).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_create_and_get_by_name() {
        let (storage, _temp) = create_test_storage();
        let snippets = SnippetStore::new(&storage);

        let record = Snippet::new("greeting", "Hello");
        snippets.create(&record).unwrap();

        let retrieved = snippets.get_by_name("greeting").unwrap();
        assert_eq!(retrieved, Some(record));
        assert!(snippets.get_by_name("Greeting").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let (storage, _temp) = create_test_storage();
        let snippets = SnippetStore::new(&storage);

        let first = Snippet::new("greeting", "Hello");
        snippets.create(&first).unwrap();

        let result = snippets.create(&Snippet::new("greeting", "Howdy"));
        assert!(matches!(result, Err(ChatseedError::UniquenessViolation { .. })));

        let all = snippets.list_all().unwrap();
        assert_eq!(all, vec![first]);
    }

    #[test]
    fn test_as_map() {
        let (storage, _temp) = create_test_storage();
        let snippets = SnippetStore::new(&storage);

        snippets.create(&Snippet::new("greeting", "Hi {{ user }}!")).unwrap();
        snippets.create(&Snippet::new("signoff", "Bye")).unwrap();

        let map = snippets.as_map().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["greeting"], "Hi {{ user }}!");
        assert_eq!(map["signoff"], "Bye");
    }

    #[test]
    fn test_as_map_sees_updates() {
        let (storage, _temp) = create_test_storage();
        let snippets = SnippetStore::new(&storage);

        let mut record = Snippet::new("greeting", "Hello");
        snippets.create(&record).unwrap();
        assert_eq!(snippets.as_map().unwrap()["greeting"], "Hello");

        record.set_content("Howdy");
        snippets.update(&record).unwrap();
        assert_eq!(snippets.as_map().unwrap()["greeting"], "Howdy");
    }

    #[test]
    fn test_delete() {
        let (storage, _temp) = create_test_storage();
        let snippets = SnippetStore::new(&storage);

        let record = Snippet::new("greeting", "Hello");
        snippets.create(&record).unwrap();
        snippets.delete(&record.id).unwrap();

        assert!(snippets.get(&record.id).unwrap().is_none());
        assert!(snippets.as_map().unwrap().is_empty());
    }
}
