use std::cmp::Ordering;
use std::sync::Arc;

use slovo_types::{DisplayWord, WordRecord, WordStats};

use crate::store::WordStore;

fn alphabetical(a: &WordRecord, b: &WordRecord) -> Ordering {
    a.word
        .to_lowercase()
        .cmp(&b.word.to_lowercase())
        .then_with(|| a.word.cmp(&b.word))
}

/// Read model for listing and searching the dictionary
#[derive(Clone)]
pub struct DictionaryView {
    store: Arc<WordStore>,
}

impl DictionaryView {
    pub fn new(store: Arc<WordStore>) -> Self {
        Self { store }
    }

    /// Alphabetical, case-insensitive. A query matches the word or a usable
    /// translation, never an error marker.
    pub async fn list(&self, query: Option<&str>) -> Vec<WordRecord> {
        let query = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();

        let mut records: Vec<WordRecord> = self
            .store
            .get_all()
            .await
            .into_iter()
            .filter(|record| {
                query.is_empty()
                    || record.word.to_lowercase().contains(&query)
                    || (!record.needs_translation()
                        && record.translation.to_lowercase().contains(&query))
            })
            .collect();

        records.sort_by(alphabetical);
        records
    }

    pub async fn entries(&self, query: Option<&str>) -> Vec<DisplayWord> {
        self.list(query)
            .await
            .into_iter()
            .map(|record| DisplayWord {
                pending: record.needs_translation(),
                id: record.id,
                word: record.word,
                translation: record.translation,
            })
            .collect()
    }

    pub async fn stats(&self) -> WordStats {
        self.store.stats().await
    }
}
