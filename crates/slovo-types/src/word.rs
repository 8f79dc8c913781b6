use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::TextSource;

pub type WordId = u64;

/// Written by the enrichment sweep when a word could not be translated
pub const TRANSLATION_ERROR: &str = "Translation error";
/// Shown for words that never got a translation
pub const TRANSLATION_UNAVAILABLE: &str = "Translation unavailable";
/// Placeholder prefix left behind by older builds
pub const LEGACY_PLACEHOLDER_PREFIX: &str = "[translation:";

/// True when `translation` does not hold a usable translation
pub fn needs_translation(translation: &str) -> bool {
    let trimmed = translation.trim();

    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case(TRANSLATION_ERROR)
        || trimmed.eq_ignore_ascii_case(TRANSLATION_UNAVAILABLE)
        || trimmed.starts_with(LEGACY_PLACEHOLDER_PREFIX)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    New,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Practice priority, lower is drilled first
    pub fn practice_rank(&self) -> u8 {
        match self {
            Difficulty::Hard => 0,
            Difficulty::Medium => 1,
            Difficulty::Easy => 2,
            Difficulty::New => 3,
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Difficulty::New),
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

/// A captured word and its study metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub id: WordId,
    pub word: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub transcription: String,
    pub date_added: DateTime<Utc>,
    #[serde(default)]
    pub practice_count: u32,
    #[serde(default)]
    pub last_practiced: Option<DateTime<Utc>>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub source: TextSource,
}

impl WordRecord {
    pub fn new(id: WordId, word: String, source: TextSource) -> Self {
        Self {
            id,
            word,
            translation: String::new(),
            transcription: String::new(),
            date_added: Utc::now(),
            practice_count: 0,
            last_practiced: None,
            difficulty: Difficulty::New,
            source,
        }
    }

    pub fn needs_translation(&self) -> bool {
        needs_translation(&self.translation)
    }

    /// Lowercased key used for uniqueness and lookups
    pub fn key(&self) -> String {
        self.word.to_lowercase()
    }

    /// Apply a partial update. Identity fields are not part of a patch.
    pub fn apply(&mut self, patch: WordPatch) {
        if let Some(translation) = patch.translation {
            self.translation = translation;
        }
        if let Some(transcription) = patch.transcription {
            self.transcription = transcription;
        }
        if let Some(count) = patch.practice_count {
            self.practice_count = count;
        }
        if let Some(last) = patch.last_practiced {
            self.last_practiced = last;
        }
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = difficulty;
        }
    }
}

/// Partial fields merged by `WordStore::update`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordPatch {
    pub translation: Option<String>,
    pub transcription: Option<String>,
    pub practice_count: Option<u32>,
    pub last_practiced: Option<Option<DateTime<Utc>>>,
    pub difficulty: Option<Difficulty>,
}

impl WordPatch {
    pub fn translation(text: impl Into<String>) -> Self {
        Self {
            translation: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty: Some(difficulty),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddStatus {
    Created,
    /// Same word (any casing) was already stored, nothing changed
    Exists,
}

/// Result of adding a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Added {
    pub id: WordId,
    pub status: AddStatus,
}

/// Per-item outcome of a batch add, input order preserved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AddReport {
    Created { word: String, id: WordId },
    Exists { word: String, id: WordId },
    Error { word: String, message: String },
}

impl AddReport {
    pub fn word(&self) -> &str {
        match self {
            AddReport::Created { word, .. }
            | AddReport::Exists { word, .. }
            | AddReport::Error { word, .. } => word,
        }
    }

    pub fn id(&self) -> Option<WordId> {
        match self {
            AddReport::Created { id, .. } | AddReport::Exists { id, .. } => Some(*id),
            AddReport::Error { .. } => None,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, AddReport::Created { .. })
    }

    pub fn is_exists(&self) -> bool {
        matches!(self, AddReport::Exists { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AddReport::Error { .. })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordStats {
    pub total: usize,
    /// Never practised
    pub new: usize,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    pub with_translation: usize,
}

impl WordStats {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a WordRecord>) -> Self {
        let mut stats = WordStats::default();

        for record in records {
            stats.total += 1;
            if record.practice_count == 0 {
                stats.new += 1;
            }
            match record.difficulty {
                Difficulty::Easy => stats.easy += 1,
                Difficulty::Medium => stats.medium += 1,
                Difficulty::Hard => stats.hard += 1,
                Difficulty::New => {}
            }
            if !record.needs_translation() {
                stats.with_translation += 1;
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_translation_sentinels() {
        assert!(needs_translation(""));
        assert!(needs_translation("   "));
        assert!(needs_translation("Translation error"));
        assert!(needs_translation("translation unavailable"));
        assert!(needs_translation("[translation: pending]"));
        assert!(!needs_translation("привіт"));
    }

    #[test]
    fn test_patch_leaves_identity_alone() {
        let mut record = WordRecord::new(7, "Cat".to_string(), TextSource::Ocr);
        let added = record.date_added;

        record.apply(WordPatch::translation("кіт"));
        record.apply(WordPatch::difficulty(Difficulty::Hard));

        assert_eq!(record.id, 7);
        assert_eq!(record.word, "Cat");
        assert_eq!(record.date_added, added);
        assert_eq!(record.translation, "кіт");
        assert_eq!(record.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_record_json_shape() {
        let record = WordRecord::new(1, "hello".to_string(), TextSource::Ocr);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["word"], "hello");
        assert_eq!(value["practiceCount"], 0);
        assert_eq!(value["difficulty"], "new");
        assert_eq!(value["source"], "ocr");
        assert!(value["lastPracticed"].is_null());
    }

    #[test]
    fn test_stats_counts() {
        let mut a = WordRecord::new(1, "a1".to_string(), TextSource::Ocr);
        a.translation = "x".to_string();
        let mut b = WordRecord::new(2, "b2".to_string(), TextSource::Ocr);
        b.practice_count = 3;
        b.difficulty = Difficulty::Hard;
        b.translation = TRANSLATION_ERROR.to_string();

        let stats = WordStats::from_records([&a, &b]);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.new, 1);
        assert_eq!(stats.hard, 1);
        assert_eq!(stats.with_translation, 1);
    }
}
