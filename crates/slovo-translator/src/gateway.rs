use std::sync::Arc;
use std::time::Duration;

use crate::allow_list::is_untranslatable;
use crate::quality;
use crate::{TranslateError, Translator};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Single-word translation with normalization and a quality gate.
///
/// Never retries; the enrichment scheduler owns retry policy.
#[derive(Clone)]
pub struct TranslationGateway {
    provider: Arc<dyn Translator>,
    timeout: Duration,
}

impl TranslationGateway {
    pub fn new(provider: Arc<dyn Translator>) -> Self {
        Self {
            provider,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn provider_name(&self) -> String {
        self.provider.metadata().name
    }

    pub async fn translate(&self, word: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        if is_untranslatable(word) {
            tracing::debug!("'{}' is on the allow-list, keeping it as-is", word);
            return Ok(word.to_string());
        }

        let call = self
            .provider
            .translate(word, from.to_string(), to.to_string());
        let translation = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| TranslateError::Timeout(self.timeout))??;

        let kind = self.provider.metadata().kind;
        let text = quality::accept(word, &translation.text, kind)?;

        tracing::debug!("{} -> {} via {}", word, text, translation.provider);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::quality::Rejection;
    use crate::{MockMode, MockTranslator, ProviderKind};

    fn mappings(pairs: &[(&str, &str)]) -> MockMode {
        MockMode::Mappings(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[tokio::test]
    async fn test_allow_list_skips_upstream() {
        let mock = Arc::new(MockTranslator::new(MockMode::Suffix));
        let gateway = TranslationGateway::new(mock.clone());

        let result = gateway.translate("the", "en", "uk").await.unwrap();
        assert_eq!(result, "the");
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_translates_trimmed_word() {
        let mock = Arc::new(MockTranslator::new(mappings(&[("hello", "привіт")])));
        let gateway = TranslationGateway::new(mock.clone());

        let result = gateway.translate("  hello ", "en", "uk").await.unwrap();
        assert_eq!(result, "привіт");
        assert_eq!(mock.calls(), vec!["hello".to_string()]);
    }

    #[tokio::test]
    async fn test_echoed_word_is_rejected() {
        let gateway = TranslationGateway::new(Arc::new(MockTranslator::new(MockMode::NoOp)));

        let err = gateway.translate("Kyiv", "en", "uk").await.unwrap_err();
        assert!(matches!(err, TranslateError::Rejected(Rejection::Unchanged)));
    }

    #[tokio::test]
    async fn test_upstream_error_surfaces() {
        let gateway = TranslationGateway::new(Arc::new(MockTranslator::new(MockMode::Error(
            "HTTP 500".to_string(),
        ))));

        let err = gateway.translate("cat", "en", "uk").await.unwrap_err();
        assert!(matches!(err, TranslateError::ApiError(_)));
    }

    #[tokio::test]
    async fn test_slow_provider_times_out() {
        let mock = MockTranslator::with_delay(MockMode::Suffix, 200);
        let gateway =
            TranslationGateway::new(Arc::new(mock)).with_timeout(Duration::from_millis(20));

        let err = gateway.translate("cat", "en", "uk").await.unwrap_err();
        assert!(matches!(err, TranslateError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_llm_heuristics_apply_by_kind() {
        let mock = MockTranslator::new(mappings(&[(
            "go",
            "Слово go перекладається як йти",
        )]))
        .with_kind(ProviderKind::Llm);
        let gateway = TranslationGateway::new(Arc::new(mock));

        let err = gateway.translate("go", "en", "uk").await.unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Rejected(Rejection::TooLong { .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_input() {
        let gateway = TranslationGateway::new(Arc::new(MockTranslator::new(MockMode::Suffix)));
        assert!(matches!(
            gateway.translate("   ", "en", "uk").await,
            Err(TranslateError::EmptyInput)
        ));
    }
}
