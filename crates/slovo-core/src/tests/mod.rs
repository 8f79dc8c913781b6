mod transfer_tests;
mod view_tests;

use std::sync::Arc;
use std::time::Duration;

use slovo_translator::{MockMode, MockTranslator, TranslationGateway};

use crate::{EnrichmentScheduler, WordStore};

pub(crate) async fn memory_store() -> Arc<WordStore> {
    Arc::new(WordStore::in_memory().await.unwrap())
}

/// Scheduler without the pacing delay so sweeps finish fast
pub(crate) fn scheduler(store: Arc<WordStore>, mock: Arc<MockTranslator>) -> EnrichmentScheduler {
    EnrichmentScheduler::new(store, TranslationGateway::new(mock)).with_delay(Duration::ZERO)
}

pub(crate) fn suffix_mock() -> Arc<MockTranslator> {
    Arc::new(MockTranslator::new(MockMode::Suffix))
}
