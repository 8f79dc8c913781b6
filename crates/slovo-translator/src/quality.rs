//! Quality gate applied to every upstream translation.
//!
//! A provider answering with an empty string, the input echoed back, one of
//! its own warning banners, or (for chat models) a paragraph of explanation
//! has not translated anything. Those answers are rejected so the caller
//! records a failure instead of storing garbage.

use crate::ProviderKind;

/// Banners MyMemory and friends embed in `translatedText` instead of failing
pub const PROVIDER_WARNING_MARKERS: &[&str] = &[
    "MYMEMORY WARNING",
    "API LIMIT EXCEEDED",
    "NO QUERY SPECIFIED",
    "INVALID LANGUAGE PAIR",
    "QUERY LENGTH LIMIT",
];

/// Phrases a chat model uses when it explains or refuses instead of translating
pub const LLM_EXPLANATION_MARKERS: &[&str] = &[
    "i'm sorry",
    "i am sorry",
    "i cannot",
    "i can't",
    "as an ai",
    "here is",
    "here's",
    "translation:",
    "translated as",
    "the word",
    "вибачте",
    "переклад:",
];

/// Chat output longer than this many times the input is treated as an explanation
pub const MAX_LLM_LENGTH_RATIO: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("empty translation")]
    Empty,

    #[error("translation is identical to the input")]
    Unchanged,

    #[error("provider warning in response: {0}")]
    ProviderWarning(String),

    #[error("translation too long ({output_len} chars for {input_len} chars of input)")]
    TooLong { input_len: usize, output_len: usize },

    #[error("response explains instead of translating: {0}")]
    Explanation(String),
}

/// Returns the trimmed translation when it passes every check
pub fn accept(source: &str, candidate: &str, kind: ProviderKind) -> Result<String, Rejection> {
    let source = source.trim();
    let candidate = candidate.trim();

    if candidate.is_empty() {
        return Err(Rejection::Empty);
    }

    if candidate.to_lowercase() == source.to_lowercase() {
        return Err(Rejection::Unchanged);
    }

    let upper = candidate.to_uppercase();
    if let Some(marker) = PROVIDER_WARNING_MARKERS
        .iter()
        .find(|marker| upper.contains(*marker))
    {
        return Err(Rejection::ProviderWarning((*marker).to_string()));
    }

    if kind == ProviderKind::Llm {
        let input_len = source.chars().count();
        let output_len = candidate.chars().count();
        if output_len > input_len * MAX_LLM_LENGTH_RATIO {
            return Err(Rejection::TooLong {
                input_len,
                output_len,
            });
        }

        let lower = candidate.to_lowercase();
        if let Some(marker) = LLM_EXPLANATION_MARKERS
            .iter()
            .find(|marker| lower.contains(*marker))
        {
            return Err(Rejection::Explanation((*marker).to_string()));
        }
    }

    Ok(candidate.to_string())
}
