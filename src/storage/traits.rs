//! Storage trait definitions and filter types.

use crate::error::Result;
use serde::{de::DeserializeOwned, Serialize};

/// An equality filter on a top-level JSON field.
#[derive(Debug, Clone)]
pub struct Filter {
    pub field: String,
    pub value: serde_json::Value,
}

impl Filter {
    /// Match records whose `field` equals `value`.
    pub fn eq(field: impl Into<String>, value: impl Serialize) -> Self {
        Self {
            field: field.into(),
            value: serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
        }
    }

    /// A missing field matches only a null value.
    pub fn matches(&self, record: &serde_json::Value) -> bool {
        match record.get(&self.field) {
            Some(v) => *v == self.value,
            None => self.value.is_null(),
        }
    }
}

/// Trait for records that have an ID field.
pub trait HasId {
    /// Get the record's unique identifier.
    fn id(&self) -> &str;

    /// Top-level JSON fields whose values must be unique within a collection.
    fn unique_fields() -> &'static [&'static str] {
        &[]
    }
}

/// Storage trait for CRUD operations on records.
pub trait Storage: Send + Sync {
    /// Create a new record.
    fn create<T: Serialize + DeserializeOwned + HasId>(&self, collection: &str, record: &T) -> Result<()>;

    /// Get a record by ID.
    fn get<T: DeserializeOwned>(&self, collection: &str, id: &str) -> Result<Option<T>>;

    /// Update an existing record.
    fn update<T: Serialize + DeserializeOwned + HasId>(&self, collection: &str, id: &str, record: &T) -> Result<()>;

    /// Delete a record by ID.
    fn delete(&self, collection: &str, id: &str) -> Result<()>;

    /// Query records with filters.
    fn query<T: DeserializeOwned>(&self, collection: &str, filters: &[Filter]) -> Result<Vec<T>>;

    /// List all records in a collection.
    fn list<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_eq_matches() {
        let filter = Filter::eq("name", "greeting");
        let record = json!({"id": "1", "name": "greeting"});
        assert!(filter.matches(&record));
    }

    #[test]
    fn test_filter_eq_no_match() {
        let filter = Filter::eq("name", "greeting");
        let record = json!({"id": "1", "name": "farewell"});
        assert!(!filter.matches(&record));
    }

    #[test]
    fn test_filter_eq_null() {
        let filter = Filter::eq("field", serde_json::Value::Null);
        let record = json!({"id": "1"});
        assert!(filter.matches(&record));
    }

    #[test]
    fn test_filter_eq_missing_field_no_match() {
        let filter = Filter::eq("name", "greeting");
        let record = json!({"id": "1", "content": "greeting"});
        assert!(!filter.matches(&record));
    }

    #[test]
    fn test_filter_eq_is_case_sensitive() {
        let filter = Filter::eq("name", "Greeting");
        let record = json!({"id": "1", "name": "greeting"});
        assert!(!filter.matches(&record));
    }

    #[test]
    fn test_default_unique_fields_empty() {
        struct Plain;
        impl HasId for Plain {
            fn id(&self) -> &str {
                "plain"
            }
        }
        assert!(Plain::unique_fields().is_empty());
        assert_eq!(Plain.id(), "plain");
    }
}
