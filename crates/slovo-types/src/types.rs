use serde::{Deserialize, Serialize};

use crate::word::WordId;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// An enrichment sweep picked up `total` untranslated words
    EnrichmentStarted {
        total: usize,
    },
    TranslationProgress {
        id: WordId,
        word: String,
        index: usize,
        total: usize,
    },
    WordTranslated {
        id: WordId,
        word: String,
        translation: String,
    },
    TranslationFailed {
        id: WordId,
        word: String,
        reason: String,
    },
    EnrichmentFinished {
        translated: usize,
        failed: usize,
    },
    /// Stored words changed, read models should refresh
    WordsChanged,
    WordsCommitted(CommitSummary),
    StatusUpdate(String),
}

/// Where a word entered the dictionary from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSource {
    #[default]
    Ocr,
    Manual,
    Import,
}

impl TextSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextSource::Ocr => "ocr",
            TextSource::Manual => "manual",
            TextSource::Import => "import",
        }
    }
}

/// Counts produced by committing a selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSummary {
    pub added: usize,
    pub existing: usize,
    pub errors: usize,
}

impl CommitSummary {
    /// Human readable one-liner, mirrors what the picker shows after saving
    pub fn message(&self) -> String {
        let mut parts = Vec::new();
        if self.added > 0 {
            parts.push(format!("Added {} new words.", self.added));
        }
        if self.existing > 0 {
            parts.push(format!(
                "{} words were already in dictionary.",
                self.existing
            ));
        }
        if self.errors > 0 {
            parts.push(format!("{} errors while adding.", self.errors));
        }

        if parts.is_empty() {
            "Words processed".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// Projection handed to presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayWord {
    pub id: WordId,
    pub word: String,
    pub translation: String,
    /// Translation missing or failed, shown as "needs translation"
    pub pending: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_message() {
        let summary = CommitSummary {
            added: 2,
            existing: 1,
            errors: 0,
        };
        assert_eq!(
            summary.message(),
            "Added 2 new words. 1 words were already in dictionary."
        );
        assert_eq!(CommitSummary::default().message(), "Words processed");
    }

    #[test]
    fn test_text_source_serde() {
        let json = serde_json::to_string(&TextSource::Import).unwrap();
        assert_eq!(json, "\"import\"");
        assert_eq!(TextSource::Ocr.as_str(), "ocr");
    }
}
