use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Storage;
use crate::Error;

/// Storage backed by a process-local map. Used by tests and by fakemode
/// deployments where durability does not matter.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    entries: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, Error> {
        let entries = self.entries.read().await;

        Ok(entries.get(path).cloned())
    }

    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), Error> {
        let mut entries = self.entries.write().await;
        entries.insert(path.to_string(), bytes.to_vec());

        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        let mut entries = self.entries.write().await;
        entries.remove(path);

        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, Error> {
        let entries = self.entries.read().await;

        // The map is ordered, so names under a shared prefix come out sorted
        let names = entries
            .range(prefix.to_string()..)
            .take_while(|(path, _)| path.starts_with(prefix))
            .map(|(path, _)| path[prefix.len()..].to_string())
            .collect();

        Ok(names)
    }
}
