use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, warn};

use super::{ApplicationStore, StoreError};
use crate::models::ApplicationRecord;

/// Keeps the collection as a JSON array in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Moves an unreadable document out of the way so the next save cannot
    /// overwrite it.
    async fn set_aside(&self) -> Result<PathBuf, StoreError> {
        let backup = self
            .path
            .with_extension(format!("json.{}.bak", Utc::now().timestamp_millis()));
        tokio::fs::rename(&self.path, &backup).await?;
        Ok(backup)
    }
}

fn decode(raw: &str) -> serde_json::Result<Vec<ApplicationRecord>> {
    let entries: Vec<Value> = serde_json::from_str(raw)?;
    entries
        .into_iter()
        .map(ApplicationRecord::from_stored)
        .collect()
}

#[async_trait]
impl ApplicationStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<ApplicationRecord>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match decode(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                let backup = self.set_aside().await?;
                warn!(
                    "Malformed collection at {} moved to {}: {e}",
                    self.path.display(),
                    backup.display()
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, records: &[ApplicationRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body = serde_json::to_vec(records)?;

        // Write beside the target and rename so readers never see a torn file.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::ApplicationRepository;
    use tempfile::TempDir;

    fn record(id: &str, name: &str) -> ApplicationRecord {
        ApplicationRecord {
            id: id.into(),
            timestamp: "2024-01-01T00:00:00.000Z".into(),
            name: name.into(),
            email: format!("{}@x.com", name.to_lowercase()),
            why: "love design".into(),
            instagram: "@handle".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_absent_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path(), "apps");
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_order_and_fields() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"), "apps");
        let mut second = record("2", "Ben");
        second.start_date = "2024-03-01".into();
        let records = vec![record("1", "Ana"), second, record("3", "Cy")];

        store.save(&records).await.unwrap();
        assert_eq!(store.load().await.unwrap(), records);
    }

    #[tokio::test]
    async fn test_save_replaces_previous_contents() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path(), "apps");
        store
            .save(&[record("1", "Ana"), record("2", "Ben")])
            .await
            .unwrap();
        store.save(&[record("3", "Cy")]).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "3");
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    fn backups(dir: &Path) -> Vec<PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.to_string_lossy().ends_with(".bak"))
            .collect()
    }

    #[tokio::test]
    async fn test_malformed_document_loads_empty_and_is_kept_aside() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path(), "apps");
        tokio::fs::write(store.path(), "{not json").await.unwrap();

        assert!(store.load().await.unwrap().is_empty());
        assert!(!store.path().exists());

        store.save(&[record("1", "Ana")]).await.unwrap();
        let kept = backups(dir.path());
        assert_eq!(kept.len(), 1);
        assert_eq!(std::fs::read_to_string(&kept[0]).unwrap(), "{not json");
    }

    #[tokio::test]
    async fn test_entries_with_null_fields_survive_an_append() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileStore::new(dir.path(), "apps"));
        let raw = r#"[{"id":"1","name":"Ana","email":"a@x.com","phone":null,"why":"love design"},{"id":2,"name":"Ben","email":"b@x.com","why":"photos"}]"#;
        tokio::fs::write(store.path(), raw).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].phone, "");
        assert_eq!(loaded[1].id, "2");

        let repo = ApplicationRepository::new(store.clone());
        repo.append(record("3", "Cy")).await.unwrap();
        let names: Vec<String> = store
            .load()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Ana", "Ben", "Cy"]);
        assert!(backups(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_reads_documents_written_by_browser_form() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path(), "sketure_apps_v1");
        let raw = r#"[{"id":"1700000000000","timestamp":"2023-11-14T22:13:20.000Z","name":"Ana","email":"a@x.com","phone":"","location":"Lisbon","role":"Illustrator","experience":"1-3 years","portfolio":"https://ana.design","instagram":"","why":"love design","availability":"Full-time","startDate":"2024-01-15"}]"#;
        tokio::fs::write(store.path(), raw).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].location, "Lisbon");
        assert_eq!(loaded[0].start_date, "2024-01-15");
    }

    #[tokio::test]
    async fn test_clear_removes_document_and_tolerates_absence() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path(), "apps");
        store.save(&[record("1", "Ana")]).await.unwrap();

        store.clear().await.unwrap();
        assert!(!store.path().exists());
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }
}
