use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ApplicationStore, StoreError};
use crate::models::ApplicationRecord;

/// Process-local store. `None` stands for an absent storage key.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RwLock<Option<Vec<ApplicationRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_records(records: Vec<ApplicationRecord>) -> Self {
        Self {
            slot: RwLock::new(Some(records)),
        }
    }

    #[cfg(test)]
    pub async fn is_present(&self) -> bool {
        self.slot.read().await.is_some()
    }
}

#[async_trait]
impl ApplicationStore for MemoryStore {
    async fn load(&self) -> Result<Vec<ApplicationRecord>, StoreError> {
        Ok(self.slot.read().await.clone().unwrap_or_default())
    }

    async fn save(&self, records: &[ApplicationRecord]) -> Result<(), StoreError> {
        *self.slot.write().await = Some(records.to_vec());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.slot.write().await = None;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_absent_until_saved_and_after_clear() {
        let store = MemoryStore::new();
        assert!(!store.is_present().await);
        assert!(store.load().await.unwrap().is_empty());

        store.save(&[ApplicationRecord::default()]).await.unwrap();
        assert!(store.is_present().await);

        store.clear().await.unwrap();
        assert!(!store.is_present().await);
    }
}
