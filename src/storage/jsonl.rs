//! JSONL-based storage implementation with in-memory caching.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use log::debug;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::traits::{Filter, HasId, Storage};
use crate::error::{ChatseedError, Result};

/// JSONL-based storage with in-memory caching.
///
/// Each collection lives in `<base_path>/<collection>.jsonl`, one record per line.
pub struct JsonlStorage {
    base_path: PathBuf,
    cache: RwLock<HashMap<String, Vec<Value>>>,
}

impl std::fmt::Debug for JsonlStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonlStorage")
            .field("base_path", &self.base_path)
            .finish_non_exhaustive()
    }
}

impl JsonlStorage {
    /// Create a new JsonlStorage at the given path.
    pub fn new(base_path: impl AsRef<Path>) -> Result<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path)?;
        Ok(Self {
            base_path,
            cache: RwLock::new(HashMap::new()),
        })
    }

    /// Directory holding the collection files.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for a collection.
    fn collection_path(&self, collection: &str) -> PathBuf {
        self.base_path.join(format!("{}.jsonl", collection))
    }

    /// Load a collection into cache if not already loaded.
    fn ensure_loaded(&self, collection: &str) -> Result<()> {
        {
            let cache = self.cache.read().map_err(|e| ChatseedError::Storage(e.to_string()))?;
            if cache.contains_key(collection) {
                return Ok(());
            }
        }

        let mut cache = self.cache.write().map_err(|e| ChatseedError::Storage(e.to_string()))?;
        if cache.contains_key(collection) {
            return Ok(());
        }

        let path = self.collection_path(collection);
        let records = if path.exists() {
            let file = File::open(&path)?;
            let reader = BufReader::new(file);
            let mut records = Vec::new();
            for line in reader.lines() {
                let line = line?;
                if !line.trim().is_empty() {
                    let record: Value = serde_json::from_str(&line)?;
                    records.push(record);
                }
            }
            records
        } else {
            Vec::new()
        };

        debug!("Loaded {} records from {}", records.len(), path.display());
        cache.insert(collection.to_string(), records);
        Ok(())
    }

    /// Append a record to the JSONL file.
    fn append_to_file(&self, collection: &str, record: &Value) -> Result<()> {
        let path = self.collection_path(collection);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{}", serde_json::to_string(record)?)?;
        Ok(())
    }

    /// Rewrite the entire collection file from the given records.
    fn rewrite_file(&self, collection: &str, records: &[Value]) -> Result<()> {
        let path = self.collection_path(collection);
        let mut file = File::create(&path)?;
        for record in records {
            writeln!(file, "{}", serde_json::to_string(record)?)?;
        }
        Ok(())
    }
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(|v| v.as_str())
}

/// Reject `candidate` if another record (any id but `skip_id`) shares its id or a unique field.
fn check_unique<T: HasId>(
    collection: &str,
    records: &[Value],
    candidate: &Value,
    skip_id: Option<&str>,
) -> Result<()> {
    let others: Vec<&Value> = records
        .iter()
        .filter(|r| skip_id.is_none() || record_id(r) != skip_id)
        .collect();

    if skip_id.is_none()
        && let Some(id) = record_id(candidate)
        && others.iter().any(|r| record_id(r) == Some(id))
    {
        return Err(ChatseedError::UniquenessViolation {
            collection: collection.to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        });
    }

    for field in T::unique_fields() {
        let Some(value) = candidate.get(*field) else {
            continue;
        };
        if others.iter().any(|r| r.get(*field) == Some(value)) {
            return Err(ChatseedError::UniquenessViolation {
                collection: collection.to_string(),
                field: field.to_string(),
                value: value.as_str().map(str::to_string).unwrap_or_else(|| value.to_string()),
            });
        }
    }

    Ok(())
}

impl Storage for JsonlStorage {
    fn create<T: Serialize + DeserializeOwned + HasId>(&self, collection: &str, record: &T) -> Result<()> {
        self.ensure_loaded(collection)?;

        let value = serde_json::to_value(record)?;

        // Check and write under one lock so concurrent creators are serialized
        let mut cache = self.cache.write().map_err(|e| ChatseedError::Storage(e.to_string()))?;
        let records = cache
            .get_mut(collection)
            .ok_or_else(|| ChatseedError::Storage(format!("Collection not loaded: {}", collection)))?;

        check_unique::<T>(collection, records, &value, None)?;

        // Append to file first (source of truth)
        self.append_to_file(collection, &value)?;
        records.push(value);

        debug!("Created {} record {}", collection, record.id());
        Ok(())
    }

    fn get<T: DeserializeOwned>(&self, collection: &str, id: &str) -> Result<Option<T>> {
        self.ensure_loaded(collection)?;

        let cache = self.cache.read().map_err(|e| ChatseedError::Storage(e.to_string()))?;
        let records = cache
            .get(collection)
            .ok_or_else(|| ChatseedError::Storage(format!("Collection not loaded: {}", collection)))?;

        for record in records {
            if record_id(record) == Some(id) {
                let parsed: T = serde_json::from_value(record.clone())?;
                return Ok(Some(parsed));
            }
        }

        Ok(None)
    }

    fn update<T: Serialize + DeserializeOwned + HasId>(&self, collection: &str, id: &str, record: &T) -> Result<()> {
        self.ensure_loaded(collection)?;

        let value = serde_json::to_value(record)?;

        let mut cache = self.cache.write().map_err(|e| ChatseedError::Storage(e.to_string()))?;
        let records = cache
            .get_mut(collection)
            .ok_or_else(|| ChatseedError::Storage(format!("Collection not loaded: {}", collection)))?;

        let index = records
            .iter()
            .position(|r| record_id(r) == Some(id))
            .ok_or_else(|| ChatseedError::NotFound(format!("{}/{}", collection, id)))?;

        check_unique::<T>(collection, records, &value, Some(id))?;

        // Rewrite the file first; the cache only changes once disk has it
        let mut next = records.clone();
        next[index] = value;
        self.rewrite_file(collection, &next)?;
        *records = next;

        debug!("Updated {} record {}", collection, id);
        Ok(())
    }

    fn delete(&self, collection: &str, id: &str) -> Result<()> {
        self.ensure_loaded(collection)?;

        let mut cache = self.cache.write().map_err(|e| ChatseedError::Storage(e.to_string()))?;
        let records = cache
            .get_mut(collection)
            .ok_or_else(|| ChatseedError::Storage(format!("Collection not loaded: {}", collection)))?;

        let next: Vec<Value> = records.iter().filter(|r| record_id(r) != Some(id)).cloned().collect();

        if next.len() == records.len() {
            return Err(ChatseedError::NotFound(format!("{}/{}", collection, id)));
        }

        self.rewrite_file(collection, &next)?;
        *records = next;

        debug!("Deleted {} record {}", collection, id);
        Ok(())
    }

    fn query<T: DeserializeOwned>(&self, collection: &str, filters: &[Filter]) -> Result<Vec<T>> {
        self.ensure_loaded(collection)?;

        let cache = self.cache.read().map_err(|e| ChatseedError::Storage(e.to_string()))?;
        let records = cache
            .get(collection)
            .ok_or_else(|| ChatseedError::Storage(format!("Collection not loaded: {}", collection)))?;

        let mut results = Vec::new();
        for record in records {
            let matches = filters.iter().all(|f| f.matches(record));
            if matches {
                let parsed: T = serde_json::from_value(record.clone())?;
                results.push(parsed);
            }
        }

        Ok(results)
    }

    fn list<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        self.query(collection, &[])
    }
}
