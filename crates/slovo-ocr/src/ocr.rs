use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::words::{WordFilter, extract_words};

/// What an engine hands to the selection picker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrOutput {
    pub text: String,
    /// Cleaned tokens in reading order, duplicates kept
    pub words: Vec<String>,
}

impl OcrOutput {
    pub fn from_text(text: String, filter: &WordFilter) -> Self {
        let words = extract_words(&text, filter);
        Self { text, words }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("image could not be decoded: {0}")]
    Decode(String),

    #[error("recognition failed: {0}")]
    Recognition(String),

    #[error("no text found")]
    NoText,
}

/// Image to words. Engines clean and tokenize before returning.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, image: &[u8]) -> Result<OcrOutput, OcrError>;

    fn name(&self) -> &str;
}

/// Treats the input as text that was already recognized elsewhere
pub struct PlainTextEngine {
    filter: WordFilter,
}

impl PlainTextEngine {
    pub fn new(filter: WordFilter) -> Self {
        Self { filter }
    }
}

impl Default for PlainTextEngine {
    fn default() -> Self {
        Self::new(WordFilter::default())
    }
}

#[async_trait]
impl OcrEngine for PlainTextEngine {
    async fn recognize(&self, image: &[u8]) -> Result<OcrOutput, OcrError> {
        let text = std::str::from_utf8(image)
            .map_err(|e| OcrError::Decode(e.to_string()))?
            .to_string();

        if text.trim().is_empty() {
            return Err(OcrError::NoText);
        }

        let output = OcrOutput::from_text(text, &self.filter);
        tracing::debug!("Recognized {} words", output.words.len());
        Ok(output)
    }

    fn name(&self) -> &str {
        "plain-text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plain_text_engine() {
        let engine = PlainTextEngine::default();
        let output = engine.recognize("Hello, world! Hello.".as_bytes()).await.unwrap();

        assert_eq!(output.text, "Hello, world! Hello.");
        assert_eq!(output.words, vec!["Hello", "world", "Hello"]);
    }

    #[tokio::test]
    async fn test_blank_input() {
        let engine = PlainTextEngine::default();
        assert!(matches!(
            engine.recognize(b"  \n ").await,
            Err(OcrError::NoText)
        ));
        assert!(matches!(
            engine.recognize(&[0xff, 0xfe]).await,
            Err(OcrError::Decode(_))
        ));
    }
}
