//! Persistence for the application collection.
//!
//! The whole collection lives under a single storage key and is always read
//! and written wholesale. `ApplicationStore` is the raw load/save seam;
//! `ApplicationRepository` layers the read-modify-write operations the form
//! and dashboard need on top of it.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ApplicationRecord;

pub mod file;
pub mod memory;
pub mod repository;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use repository::ApplicationRepository;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Backend holding the persisted collection under one key.
///
/// Carried in `AppState` as `Arc<dyn ApplicationStore>` through the repository.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Returns the stored collection, oldest first. An absent or unreadable
    /// document yields an empty collection.
    async fn load(&self) -> Result<Vec<ApplicationRecord>, StoreError>;

    /// Replaces the stored collection.
    async fn save(&self, records: &[ApplicationRecord]) -> Result<(), StoreError>;

    /// Removes the stored collection entirely.
    async fn clear(&self) -> Result<(), StoreError>;

    /// Human-readable location, used in startup logs.
    fn describe(&self) -> String;
}
