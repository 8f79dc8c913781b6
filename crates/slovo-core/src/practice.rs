use std::cmp::Ordering;

use chrono::Utc;
use slovo_types::{Difficulty, WordId, WordRecord};

use crate::error::StoreError;
use crate::store::WordStore;

/// Drill order: never practised first, then by difficulty (hard first),
/// then whatever was practised longest ago
fn practice_order(a: &WordRecord, b: &WordRecord) -> Ordering {
    let practised = |r: &WordRecord| r.practice_count > 0;

    practised(a)
        .cmp(&practised(b))
        .then_with(|| a.difficulty.practice_rank().cmp(&b.difficulty.practice_rank()))
        .then_with(|| a.last_practiced.cmp(&b.last_practiced))
        .then_with(|| a.id.cmp(&b.id))
}

impl WordStore {
    /// Up to `limit` words worth drilling next
    pub async fn practice_queue(&self, limit: usize) -> Vec<WordRecord> {
        let mut records = self.get_all().await;
        records.sort_by(practice_order);
        records.truncate(limit);
        records
    }

    /// Counts one drill and stores the rating the learner gave
    pub async fn record_practice(
        &self,
        id: WordId,
        difficulty: Difficulty,
    ) -> Result<WordRecord, StoreError> {
        let record = self
            .modify(id, |record| {
                record.practice_count = record.practice_count.saturating_add(1);
                record.last_practiced = Some(Utc::now());
                record.difficulty = difficulty;
            })
            .await?;

        tracing::debug!(
            "Practised '{}' ({} times, {:?})",
            record.word,
            record.practice_count,
            record.difficulty
        );
        Ok(record)
    }
}
