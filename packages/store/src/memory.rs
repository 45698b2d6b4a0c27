use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{Result, StoreError};
use crate::storage::RecordStorage;

/// In-memory RecordStorage for testing and builds without a durable backend.
///
/// Clones share the same records, so a test can keep one handle and reopen a
/// store from another to simulate a restart.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    records: Arc<Mutex<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the total stored bytes (keys + values). Writes that would exceed
    /// the limit fail like a browser storage quota does.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    fn records(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.records
            .lock()
            .map_err(|_| StoreError::Storage("memory storage lock poisoned".to_string()))
    }
}

impl RecordStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut records = self.records()?;
        if let Some(quota) = self.quota {
            let others: usize = records
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > quota {
                return Err(StoreError::Storage(format!(
                    "quota exceeded: {needed} bytes needed, {quota} allowed"
                )));
            }
        }
        records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.records()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_remove() {
        let storage = MemoryStorage::new();

        // Initially empty
        assert!(storage.read("portfolio-data").unwrap().is_none());

        storage.write("portfolio-data", "{}").unwrap();
        assert_eq!(storage.read("portfolio-data").unwrap().as_deref(), Some("{}"));

        storage.remove("portfolio-data").unwrap();
        assert!(storage.read("portfolio-data").unwrap().is_none());

        // Removing again is fine
        storage.remove("portfolio-data").unwrap();
    }

    #[test]
    fn test_clones_share_records() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.write("k", "v").unwrap();
        assert_eq!(other.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_quota_rejects_oversized_write() {
        let storage = MemoryStorage::new().with_quota(8);
        storage.write("k", "1234567").unwrap();

        let err = storage.write("k", "12345678").unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));

        // Failed write leaves the previous value in place
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("1234567"));
    }
}
