use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use slovo_config::Config;
use slovo_config::translator::TranslatorConfig;
use slovo_core::{
    DictionaryView, EnrichmentScheduler, EventSink, JsonFileBackend, LanguagePair, MemoryBackend,
    SelectionSession, StorageBackend, WordStore,
};
use slovo_ocr::{OcrEngine, PlainTextEngine, WordFilter};
use slovo_translator::{
    DeepLTranslator, LlmTranslator, MyMemoryTranslator, TranslationGateway, Translator,
};
use slovo_types::TextSource;

use crate::profile::{resolve_store_path, slovo_root};

/// Picks the upstream provider named in the config
pub fn build_translator(config: &TranslatorConfig) -> anyhow::Result<Arc<dyn Translator>> {
    let translator: Arc<dyn Translator> = match config.provider.to_lowercase().as_str() {
        "mymemory" => {
            let mut translator =
                MyMemoryTranslator::new().with_contact_email(config.contact_email.clone());
            if let Some(url) = &config.api_url {
                translator = translator.with_url(url.clone());
            }
            Arc::new(translator)
        }
        "deepl" => Arc::new(DeepLTranslator::new(
            config.api_key.clone(),
            config.api_url.clone(),
        )),
        "llm" => Arc::new(LlmTranslator::new(
            config.api_key.clone(),
            config.model.clone(),
            config.api_url.clone(),
        )),
        other => anyhow::bail!("unknown translator provider '{other}'"),
    };

    Ok(translator)
}

/// Everything a command needs, wired once at startup
pub struct AppState {
    pub config: Config,
    pub store: Arc<WordStore>,
    /// `None` when translation is disabled
    pub scheduler: Option<Arc<EnrichmentScheduler>>,
    pub sink: Arc<dyn EventSink>,
    pub ocr: Arc<dyn OcrEngine>,
}

impl AppState {
    pub async fn build(
        config: Config,
        in_memory: bool,
        sink: Arc<dyn EventSink>,
    ) -> anyhow::Result<Self> {
        let backend: Arc<dyn StorageBackend> = if in_memory || config.store.in_memory {
            Arc::new(MemoryBackend::new())
        } else {
            Arc::new(JsonFileBackend::new(resolve_store_path(
                &slovo_root(),
                &config,
            )))
        };

        let store = WordStore::open(backend)
            .await
            .context("could not open the word store")?;

        let translator = if config.translator.enabled {
            Some(build_translator(&config.translator)?)
        } else {
            tracing::warn!("Translator disabled, words will stay untranslated");
            None
        };

        Ok(Self::assemble(config, Arc::new(store), translator, sink))
    }

    pub fn assemble(
        config: Config,
        store: Arc<WordStore>,
        translator: Option<Arc<dyn Translator>>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let scheduler = translator.map(|translator| {
            let gateway = TranslationGateway::new(translator)
                .with_timeout(Duration::from_secs(config.translator.timeout_seconds));

            Arc::new(
                EnrichmentScheduler::new(store.clone(), gateway)
                    .with_sink(sink.clone())
                    .with_languages(LanguagePair {
                        from: config.translator.from_lang.clone(),
                        to: config.translator.to_lang.clone(),
                    })
                    .with_delay(Duration::from_millis(config.enrichment.delay_ms)),
            )
        });

        let ocr = Arc::new(PlainTextEngine::new(WordFilter {
            min_len: config.ocr.min_word_len,
            drop_stopwords: !config.ocr.keep_stopwords,
        }));

        Self {
            config,
            store,
            scheduler,
            sink,
            ocr,
        }
    }

    /// A picker wired to this app's store, events and enrichment
    pub fn session(&self, source: TextSource) -> SelectionSession {
        let mut session = SelectionSession::new(self.store.clone())
            .with_sink(self.sink.clone())
            .with_source(source);

        if self.config.enrichment.enabled
            && let Some(scheduler) = &self.scheduler
        {
            session = session.with_scheduler(scheduler.clone());
        }
        session
    }

    pub fn view(&self) -> DictionaryView {
        DictionaryView::new(self.store.clone())
    }

    pub fn scheduler(&self) -> anyhow::Result<&Arc<EnrichmentScheduler>> {
        self.scheduler
            .as_ref()
            .context("translation is disabled in this profile")
    }

    /// Lets an in-flight sweep finish before the process exits
    pub async fn wait_idle(&self) {
        if let Some(scheduler) = &self.scheduler {
            scheduler.wait_idle().await;
        }
    }
}
