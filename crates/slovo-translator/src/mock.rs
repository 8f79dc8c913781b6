//! Deterministic, network-free translator for tests and offline runs.
//!
//! ```ignore
//! let mock = MockTranslator::new(MockMode::Suffix);
//! let result = mock.translate("hello", "en".into(), "uk".into()).await?;
//! assert_eq!(result.text, "hello_uk");
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::{
    LanguageCode, ProviderKind, ProviderMetadata, TranslateError, Translation, Translator,
};

#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the target language: "hello" -> "hello_uk"
    Suffix,
    /// Fixed word -> translation table, unknown words fall back to `Suffix`
    Mappings(HashMap<String, String>),
    /// Every call fails with an API error
    Error(String),
    /// Echo the input back unchanged
    NoOp,
}

#[derive(Debug)]
pub struct MockTranslator {
    mode: MockMode,
    kind: ProviderKind,
    delay_ms: u64,
    /// Words that fail regardless of mode
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
    call_count: AtomicUsize,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            kind: ProviderKind::MachineTranslation,
            delay_ms: 0,
            failing: HashSet::new(),
            calls: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Simulated network latency per call
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            delay_ms,
            ..Self::new(mode)
        }
    }

    pub fn with_kind(mut self, kind: ProviderKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn failing_on(mut self, word: &str) -> Self {
        self.failing.insert(word.to_lowercase());
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Words passed upstream, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn apply(&self, text: &str, to: &str) -> Result<String, TranslateError> {
        if self.failing.contains(&text.to_lowercase()) {
            return Err(TranslateError::ApiError(format!("mock failure for '{text}'")));
        }

        match &self.mode {
            MockMode::Suffix => Ok(format!("{text}_{to}")),
            MockMode::Mappings(map) => Ok(map
                .get(text)
                .cloned()
                .unwrap_or_else(|| format!("{text}_{to}"))),
            MockMode::Error(msg) => Err(TranslateError::ApiError(msg.clone())),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(text.to_string());
        }

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        let text = self.apply(text, &to)?;
        Ok(Translation {
            text,
            from,
            to,
            provider: "mock".to_string(),
            confidence: None,
            alternatives: vec![],
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Mock Translator".to_string(),
            kind: self.kind,
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}
