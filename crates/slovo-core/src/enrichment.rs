//! Background translation of stored words.
//!
//! A sweep snapshots every record whose translation is missing or failed and
//! translates them one at a time, pausing between calls so free providers do
//! not throttle us. At most one sweep runs per scheduler; a trigger that
//! arrives mid-sweep is dropped and the words it cared about are picked up
//! by the next one.

use std::sync::Arc;
use std::time::Duration;

use slovo_translator::TranslationGateway;
use slovo_types::{AppEvent, TRANSLATION_ERROR, WordId, WordPatch, WordRecord};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::EnrichmentError;
use crate::events::{EventSink, NoopSink};
use crate::store::WordStore;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(350);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub from: String,
    pub to: String,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            from: "en".to_string(),
            to: "uk".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub total: usize,
    pub translated: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Another sweep owned the flag, this call did nothing
    AlreadyRunning,
    /// Every stored word already had a usable translation
    NothingToDo,
    Completed(RunReport),
}

/// Resets the running flag however the sweep ends, including when the task
/// holding it is aborted before its first poll
struct RunGuard(Arc<watch::Sender<bool>>);

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}

pub struct EnrichmentScheduler {
    store: Arc<WordStore>,
    gateway: TranslationGateway,
    sink: Arc<dyn EventSink>,
    languages: LanguagePair,
    delay: Duration,
    running: Arc<watch::Sender<bool>>,
}

impl EnrichmentScheduler {
    pub fn new(store: Arc<WordStore>, gateway: TranslationGateway) -> Self {
        let (running, _) = watch::channel(false);
        Self {
            store,
            gateway,
            sink: Arc::new(NoopSink),
            languages: LanguagePair::default(),
            delay: DEFAULT_DELAY,
            running: Arc::new(running),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_languages(mut self, languages: LanguagePair) -> Self {
        self.languages = languages;
        self
    }

    /// Pause between two upstream calls
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn languages(&self) -> &LanguagePair {
        &self.languages
    }

    pub fn is_running(&self) -> bool {
        *self.running.borrow()
    }

    /// Resolves once no sweep is in flight
    pub async fn wait_idle(&self) {
        let mut rx = self.running.subscribe();
        let _ = rx.wait_for(|running| !*running).await;
    }

    fn try_claim(&self) -> Option<RunGuard> {
        if self.running.send_replace(true) {
            return None;
        }
        Some(RunGuard(Arc::clone(&self.running)))
    }

    /// Runs a sweep on the current task
    pub async fn run(&self) -> RunOutcome {
        let Some(_guard) = self.try_claim() else {
            tracing::debug!("Enrichment already running, skipping trigger");
            return RunOutcome::AlreadyRunning;
        };
        self.sweep().await
    }

    /// Claims the flag right away and sweeps on a background task.
    /// `None` when a sweep is already in flight.
    pub fn spawn_run(self: &Arc<Self>) -> Option<JoinHandle<RunOutcome>> {
        let Some(guard) = self.try_claim() else {
            tracing::debug!("Enrichment already running, skipping trigger");
            return None;
        };

        let this = Arc::clone(self);
        Some(tokio::spawn(async move {
            let _guard = guard;
            this.sweep().await
        }))
    }

    async fn sweep(&self) -> RunOutcome {
        let pending: Vec<WordRecord> = self
            .store
            .get_all()
            .await
            .into_iter()
            .filter(|record| record.needs_translation())
            .collect();

        if pending.is_empty() {
            tracing::debug!("No words need translation");
            return RunOutcome::NothingToDo;
        }

        let total = pending.len();
        let mut report = RunReport {
            total,
            ..Default::default()
        };

        tracing::info!(
            "Translating {} words via {}",
            total,
            self.gateway.provider_name()
        );
        self.sink.emit(AppEvent::EnrichmentStarted { total });

        for (index, record) in pending.into_iter().enumerate() {
            self.sink.emit(AppEvent::TranslationProgress {
                id: record.id,
                word: record.word.clone(),
                index: index + 1,
                total,
            });

            if self.translate_record(&record).await {
                report.translated += 1;
            } else {
                report.failed += 1;
            }

            if index + 1 < total && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        tracing::info!(
            "Translation sweep done: {} translated, {} failed",
            report.translated,
            report.failed
        );
        self.sink.emit(AppEvent::EnrichmentFinished {
            translated: report.translated,
            failed: report.failed,
        });

        RunOutcome::Completed(report)
    }

    /// One word of a sweep. Failures are recorded on the word, never raised.
    async fn translate_record(&self, record: &WordRecord) -> bool {
        let LanguagePair { from, to } = &self.languages;

        match self.gateway.translate(&record.word, from, to).await {
            Ok(translation) => {
                let patch = WordPatch::translation(translation.clone());
                if let Err(e) = self.store.update(record.id, patch).await {
                    tracing::warn!("Could not store translation for '{}': {}", record.word, e);
                    return false;
                }

                self.sink.emit(AppEvent::WordTranslated {
                    id: record.id,
                    word: record.word.clone(),
                    translation,
                });
                self.sink.emit(AppEvent::WordsChanged);
                true
            }
            Err(e) => {
                tracing::warn!("Translation failed for '{}': {}", record.word, e);

                let patch = WordPatch::translation(TRANSLATION_ERROR);
                if let Err(store_err) = self.store.update(record.id, patch).await {
                    tracing::warn!(
                        "Could not mark '{}' as failed: {}",
                        record.word,
                        store_err
                    );
                }

                self.sink.emit(AppEvent::TranslationFailed {
                    id: record.id,
                    word: record.word.clone(),
                    reason: e.to_string(),
                });
                self.sink.emit(AppEvent::WordsChanged);
                false
            }
        }
    }

    /// Translates one word on demand, ignoring the running flag.
    /// A failure leaves the stored translation untouched.
    pub async fn retranslate_one(&self, id: WordId) -> Result<String, EnrichmentError> {
        let record = self
            .store
            .get(id)
            .await
            .ok_or(EnrichmentError::NotFound(id))?;

        self.sink
            .emit(AppEvent::StatusUpdate(format!("Translating: {}...", record.word)));

        let LanguagePair { from, to } = &self.languages;
        let translation = self.gateway.translate(&record.word, from, to).await?;

        self.store
            .update(id, WordPatch::translation(translation.clone()))
            .await?;

        self.sink.emit(AppEvent::WordTranslated {
            id,
            word: record.word,
            translation: translation.clone(),
        });
        self.sink.emit(AppEvent::WordsChanged);
        Ok(translation)
    }
}
