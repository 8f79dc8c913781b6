use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use slovo_types::{WordId, WordRecord};

use crate::error::StoreError;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Everything a backend needs to bring a store back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub version: u32,
    /// Next id to hand out, ids are never reused
    pub next_id: WordId,
    pub words: Vec<WordRecord>,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            next_id: 1,
            words: Vec::new(),
        }
    }
}

/// Durable home of the dictionary. The store keeps the working set in memory
/// and hands every committed change to the backend as a full snapshot.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// `None` when nothing was ever persisted
    async fn load(&self) -> Result<Option<StoreSnapshot>, StoreError>;

    async fn persist(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError>;

    fn describe(&self) -> String;
}
