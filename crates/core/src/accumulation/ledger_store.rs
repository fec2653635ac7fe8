use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::accumulation_traits::LedgerStore;
use crate::errors::{Error, Result};

/// Process-local ledger store. Contents are lost when it is dropped.
#[derive(Default)]
pub struct InMemoryLedgerStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one blob.
    pub fn with_blob(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedgerStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| Error::Unexpected("ledger store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| Error::Unexpected("ledger store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
