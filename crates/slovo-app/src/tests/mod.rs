mod profile_tests;

use std::sync::Arc;

use kanal::AsyncReceiver;
use slovo_config::Config;
use slovo_core::{ChannelSink, WordStore};
use slovo_translator::{MockMode, MockTranslator};
use slovo_types::AppEvent;

use crate::state::AppState;

/// In-memory app with a mock translator and no pacing delay
pub(crate) async fn test_state(
    mock: Arc<MockTranslator>,
) -> (AppState, AsyncReceiver<AppEvent>) {
    let mut config = Config::default();
    config.enrichment.delay_ms = 0;

    let (tx, rx) = kanal::unbounded_async();
    let store = Arc::new(WordStore::in_memory().await.unwrap());
    let state = AppState::assemble(config, store, Some(mock), Arc::new(ChannelSink::new(tx)));
    (state, rx)
}

pub(crate) fn suffix_mock() -> Arc<MockTranslator> {
    Arc::new(MockTranslator::new(MockMode::Suffix))
}
