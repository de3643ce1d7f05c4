use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use super::{ApplicationStore, StoreError};
use crate::models::ApplicationRecord;

/// Read-modify-write operations over the persisted collection.
///
/// Every mutation loads the full collection, changes it in memory and saves
/// it back. Mutations inside this process are serialised by `write_lock`.
pub struct ApplicationRepository {
    store: Arc<dyn ApplicationStore>,
    write_lock: Mutex<()>,
}

impl ApplicationRepository {
    pub fn new(store: Arc<dyn ApplicationStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn describe(&self) -> String {
        self.store.describe()
    }

    /// The collection in storage order (oldest first).
    pub async fn list(&self) -> Result<Vec<ApplicationRecord>, StoreError> {
        self.store.load().await
    }

    pub async fn find(&self, id: &str) -> Result<Option<ApplicationRecord>, StoreError> {
        Ok(self.store.load().await?.into_iter().find(|r| r.id == id))
    }

    /// Appends without dedup or id checks.
    pub async fn append(&self, record: ApplicationRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load().await?;
        let id = record.id.clone();
        records.push(record);
        self.store.save(&records).await?;
        info!("Stored application {id} ({} total)", records.len());
        Ok(())
    }

    /// Removes every record with `id`. Returns whether anything was removed;
    /// the collection is written back either way.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load().await?;
        let before = records.len();
        records.retain(|r| r.id != id);
        let removed = records.len() != before;
        self.store.save(&records).await?;
        if removed {
            info!("Deleted application {id} ({} remaining)", records.len());
        }
        Ok(removed)
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.store.clear().await?;
        info!("Cleared all applications");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn record(id: &str) -> ApplicationRecord {
        ApplicationRecord {
            id: id.into(),
            name: format!("Applicant {id}"),
            email: format!("{id}@x.com"),
            why: "love design".into(),
            portfolio: format!("https://{id}.design"),
            ..Default::default()
        }
    }

    fn repo_with(ids: &[&str]) -> ApplicationRepository {
        let records = ids.iter().map(|id| record(id)).collect();
        ApplicationRepository::new(Arc::new(MemoryStore::with_records(records)))
    }

    fn ids(records: &[ApplicationRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_append_keeps_insertion_order() {
        let repo = repo_with(&[]);
        repo.append(record("1")).await.unwrap();
        repo.append(record("2")).await.unwrap();
        assert_eq!(ids(&repo.list().await.unwrap()), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_append_does_not_dedup() {
        let repo = repo_with(&["1"]);
        repo.append(record("1")).await.unwrap();
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_removes_only_matching_record() {
        let repo = repo_with(&["1", "2", "3"]);
        assert!(repo.delete("2").await.unwrap());
        let remaining = repo.list().await.unwrap();
        assert_eq!(ids(&remaining), vec!["1", "3"]);
        assert_eq!(remaining[0], record("1"));
        assert_eq!(remaining[1], record("3"));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let repo = repo_with(&["1", "2"]);
        assert!(!repo.delete("9").await.unwrap());
        assert_eq!(ids(&repo.list().await.unwrap()), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_clear_empties_collection() {
        let repo = repo_with(&["1", "2", "3"]);
        repo.clear().await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = repo_with(&["1", "2"]);
        assert_eq!(repo.find("2").await.unwrap(), Some(record("2")));
        assert_eq!(repo.find("7").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let repo = Arc::new(repo_with(&[]));
        let handles: Vec<_> = (0..20)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.append(record(&i.to_string())).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        assert_eq!(repo.list().await.unwrap().len(), 20);
    }
}
