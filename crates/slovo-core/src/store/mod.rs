mod backend;
mod json_file;
mod memory;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use slovo_types::{
    AddReport, AddStatus, Added, TextSource, WordId, WordPatch, WordRecord, WordStats,
};
use tokio::sync::RwLock;

pub use backend::{SNAPSHOT_VERSION, StorageBackend, StoreSnapshot};
pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;

use crate::error::StoreError;
use crate::preprocess::normalize_word;

#[derive(Debug, Clone)]
struct StoreState {
    records: BTreeMap<WordId, WordRecord>,
    /// Lowercased word -> id
    by_key: HashMap<String, WordId>,
    next_id: WordId,
}

impl StoreState {
    fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let mut state = StoreState {
            records: BTreeMap::new(),
            by_key: HashMap::new(),
            next_id: snapshot.next_id.max(1),
        };

        for record in snapshot.words {
            let key = record.key();
            if let Some(existing) = state.by_key.get(&key) {
                tracing::warn!(
                    "Duplicate word '{}' (ids {} and {}), keeping the first",
                    record.word,
                    existing,
                    record.id
                );
                continue;
            }
            state.next_id = state.next_id.max(record.id + 1);
            state.by_key.insert(key, record.id);
            state.records.insert(record.id, record);
        }

        state
    }

    fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            version: SNAPSHOT_VERSION,
            next_id: self.next_id,
            words: self.records.values().cloned().collect(),
        }
    }

    fn insert(&mut self, word: String, source: TextSource) -> WordId {
        let id = self.next_id;
        self.next_id += 1;

        let record = WordRecord::new(id, word, source);
        self.by_key.insert(record.key(), id);
        self.records.insert(id, record);
        id
    }
}

/// The dictionary: unique words keyed by auto-assigned ids.
///
/// Reads are served from memory. Every write is persisted through the
/// backend before it becomes visible, so a failed write leaves the store
/// exactly as it was.
pub struct WordStore {
    backend: Arc<dyn StorageBackend>,
    state: RwLock<StoreState>,
}

impl WordStore {
    /// Loads whatever the backend holds. Fails when storage is unreadable.
    pub async fn open(backend: Arc<dyn StorageBackend>) -> Result<Self, StoreError> {
        let snapshot = backend.load().await?.unwrap_or_default();
        let state = StoreState::from_snapshot(snapshot);

        tracing::info!(
            "Opened word store at {} with {} words",
            backend.describe(),
            state.records.len()
        );

        Ok(Self {
            backend,
            state: RwLock::new(state),
        })
    }

    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::open(Arc::new(MemoryBackend::new())).await
    }

    pub fn describe(&self) -> String {
        self.backend.describe()
    }

    async fn commit(&self, next: &StoreState) -> Result<(), StoreError> {
        self.backend.persist(&next.snapshot()).await
    }

    pub async fn add_one(&self, text: &str) -> Result<Added, StoreError> {
        self.add_one_from(text, TextSource::Ocr).await
    }

    /// Adds `text` unless a case-insensitive match already exists
    pub async fn add_one_from(&self, text: &str, source: TextSource) -> Result<Added, StoreError> {
        let word = normalize_word(text);
        if word.is_empty() {
            return Err(StoreError::EmptyWord);
        }

        let mut state = self.state.write().await;
        if let Some(&id) = state.by_key.get(&word.to_lowercase()) {
            tracing::debug!("'{}' already stored as #{}", word, id);
            return Ok(Added {
                id,
                status: AddStatus::Exists,
            });
        }

        let mut next = state.clone();
        let id = next.insert(word, source);
        self.commit(&next).await?;
        *state = next;

        Ok(Added {
            id,
            status: AddStatus::Created,
        })
    }

    pub async fn add_many<S: AsRef<str>>(&self, texts: &[S]) -> Vec<AddReport> {
        self.add_many_from(texts, TextSource::Ocr).await
    }

    /// Sequential adds. One failing item never aborts the rest.
    pub async fn add_many_from<S: AsRef<str>>(
        &self,
        texts: &[S],
        source: TextSource,
    ) -> Vec<AddReport> {
        let mut reports = Vec::with_capacity(texts.len());

        for text in texts {
            let text = text.as_ref();
            let report = match self.add_one_from(text, source).await {
                Ok(Added {
                    id,
                    status: AddStatus::Created,
                }) => AddReport::Created {
                    word: normalize_word(text),
                    id,
                },
                Ok(Added {
                    id,
                    status: AddStatus::Exists,
                }) => AddReport::Exists {
                    word: normalize_word(text),
                    id,
                },
                Err(e) => {
                    tracing::warn!("Could not add '{}': {}", text, e);
                    AddReport::Error {
                        word: text.to_string(),
                        message: e.to_string(),
                    }
                }
            };
            reports.push(report);
        }

        reports
    }

    pub async fn get(&self, id: WordId) -> Option<WordRecord> {
        self.state.read().await.records.get(&id).cloned()
    }

    /// Case-insensitive lookup by word text
    pub async fn get_by_text(&self, text: &str) -> Option<WordRecord> {
        let key = normalize_word(text).to_lowercase();
        let state = self.state.read().await;
        state
            .by_key
            .get(&key)
            .and_then(|id| state.records.get(id))
            .cloned()
    }

    /// Every record in ascending id order
    pub async fn get_all(&self) -> Vec<WordRecord> {
        self.state.read().await.records.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Edits one record in place under the write lock
    pub(crate) async fn modify<F>(&self, id: WordId, edit: F) -> Result<WordRecord, StoreError>
    where
        F: FnOnce(&mut WordRecord),
    {
        let mut state = self.state.write().await;
        if !state.records.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }

        let mut next = state.clone();
        let record = next.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        edit(record);
        let updated = record.clone();

        self.commit(&next).await?;
        *state = next;
        Ok(updated)
    }

    /// Merges `patch` into the record. Id, word and date added never change.
    pub async fn update(&self, id: WordId, patch: WordPatch) -> Result<WordRecord, StoreError> {
        self.modify(id, |record| record.apply(patch)).await
    }

    /// Returns whether a record was removed
    pub async fn delete(&self, id: WordId) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        let Some(record) = state.records.get(&id) else {
            return Ok(false);
        };

        let key = record.key();
        let mut next = state.clone();
        next.records.remove(&id);
        next.by_key.remove(&key);

        self.commit(&next).await?;
        *state = next;
        tracing::debug!("Deleted word #{}", id);
        Ok(true)
    }

    /// Removes every record. Ids handed out before stay retired.
    pub async fn clear(&self) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let mut next = state.clone();
        next.records.clear();
        next.by_key.clear();

        self.commit(&next).await?;
        *state = next;
        tracing::info!("Cleared word store");
        Ok(())
    }

    pub async fn stats(&self) -> WordStats {
        WordStats::from_records(self.state.read().await.records.values())
    }
}
