use std::collections::HashSet;
use std::sync::Arc;

use slovo_types::{AddReport, AppEvent, CommitSummary, TextSource};

use crate::enrichment::EnrichmentScheduler;
use crate::error::SessionError;
use crate::events::{EventSink, NoopSink};
use crate::store::WordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    /// Candidates are shown and can be toggled
    Loaded,
}

fn summarize(reports: &[AddReport]) -> CommitSummary {
    let mut summary = CommitSummary::default();
    for report in reports {
        match report {
            AddReport::Created { .. } => summary.added += 1,
            AddReport::Exists { .. } => summary.existing += 1,
            AddReport::Error { .. } => summary.errors += 1,
        }
    }
    summary
}

/// Picker between recognition and the store. Selection is by word text,
/// so duplicate candidates toggle together and commit once.
pub struct SelectionSession {
    store: Arc<WordStore>,
    scheduler: Option<Arc<EnrichmentScheduler>>,
    sink: Arc<dyn EventSink>,
    source: TextSource,
    candidates: Vec<String>,
    selected: HashSet<String>,
}

impl SelectionSession {
    pub fn new(store: Arc<WordStore>) -> Self {
        Self {
            store,
            scheduler: None,
            sink: Arc::new(NoopSink),
            source: TextSource::Ocr,
            candidates: Vec::new(),
            selected: HashSet::new(),
        }
    }

    /// Committing new words kicks off a sweep on this scheduler
    pub fn with_scheduler(mut self, scheduler: Arc<EnrichmentScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_source(mut self, source: TextSource) -> Self {
        self.source = source;
        self
    }

    pub fn state(&self) -> SessionState {
        if self.candidates.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Loaded
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Replaces the candidates and clears the selection
    pub fn load(&mut self, words: Vec<String>) -> Result<(), SessionError> {
        if words.is_empty() {
            return Err(SessionError::InvalidInput(
                "no words to choose from".to_string(),
            ));
        }

        tracing::debug!("Loaded {} candidate words", words.len());
        self.candidates = words;
        self.selected.clear();
        Ok(())
    }

    fn ensure_candidate(&self, word: &str) -> Result<(), SessionError> {
        if self.candidates.iter().any(|c| c == word) {
            Ok(())
        } else {
            Err(SessionError::InvalidInput(format!(
                "'{word}' is not one of the candidates"
            )))
        }
    }

    /// Flips `word` and returns whether it is now selected
    pub fn toggle(&mut self, word: &str) -> Result<bool, SessionError> {
        self.ensure_candidate(word)?;

        if self.selected.remove(word) {
            Ok(false)
        } else {
            self.selected.insert(word.to_string());
            Ok(true)
        }
    }

    /// Toggles the candidate at a 0-based position
    pub fn toggle_at(&mut self, index: usize) -> Result<bool, SessionError> {
        let word = self.candidates.get(index).cloned().ok_or_else(|| {
            SessionError::InvalidInput(format!(
                "position {} is out of range (1-{})",
                index + 1,
                self.candidates.len()
            ))
        })?;
        self.toggle(&word)
    }

    pub fn select_all(&mut self) {
        self.selected = self.candidates.iter().cloned().collect();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// Selects candidates whose length in characters falls in `min..=max`,
    /// leaving everything else as it was
    pub fn select_by_length(&mut self, min: usize, max: usize) {
        for word in &self.candidates {
            let len = word.chars().count();
            if (min..=max).contains(&len) {
                self.selected.insert(word.clone());
            }
        }
    }

    pub fn is_selected(&self, word: &str) -> bool {
        self.selected.contains(word)
    }

    /// Distinct selected words in candidate order
    pub fn selected(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.candidates
            .iter()
            .filter(|word| self.selected.contains(*word) && seen.insert(word.as_str()))
            .cloned()
            .collect()
    }

    pub fn cancel(&mut self) {
        self.candidates.clear();
        self.selected.clear();
    }

    /// Stores the selection, resets the session and starts enrichment when
    /// anything new was added. An empty selection changes nothing.
    pub async fn commit(&mut self) -> Result<CommitSummary, SessionError> {
        if self.selected.is_empty() {
            return Err(SessionError::EmptySelection);
        }

        let words = self.selected();
        self.cancel();

        let reports = self.store.add_many_from(&words, self.source).await;
        let summary = summarize(&reports);

        tracing::info!(
            "Committed selection: {} added, {} existing, {} errors",
            summary.added,
            summary.existing,
            summary.errors
        );
        self.sink.emit(AppEvent::WordsCommitted(summary));
        self.sink.emit(AppEvent::WordsChanged);

        if summary.added > 0
            && let Some(scheduler) = &self.scheduler
            && scheduler.spawn_run().is_none()
        {
            tracing::debug!("New words will be picked up by the sweep in flight or the next one");
        }

        Ok(summary)
    }
}
