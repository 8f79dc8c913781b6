/// Common English function words nobody wants as flashcards
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "or", "she", "that", "the", "to", "was", "were", "will", "with",
];

#[derive(Debug, Clone)]
pub struct WordFilter {
    /// Minimum length in characters
    pub min_len: usize,
    pub drop_stopwords: bool,
}

impl Default for WordFilter {
    fn default() -> Self {
        Self {
            min_len: 2,
            drop_stopwords: true,
        }
    }
}

fn clean_token(token: &str) -> String {
    let kept: String = token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '\'' || *c == '’')
        .collect();

    kept.trim_matches(|c| c == '\'' || c == '’').to_string()
}

/// Split recognized text into candidate words, reading order, duplicates kept
pub fn extract_words(text: &str, filter: &WordFilter) -> Vec<String> {
    text.split_whitespace()
        .map(clean_token)
        .filter(|word| word.chars().count() >= filter.min_len)
        .filter(|word| {
            !filter.drop_stopwords || !STOPWORDS.contains(&word.to_lowercase().as_str())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_short_tokens() {
        let words = extract_words("Hi! I'm at the «café», x 42.", &WordFilter::default());
        assert_eq!(words, vec!["Hi", "I'm", "café", "42"]);
    }

    #[test]
    fn test_keeps_cyrillic_and_duplicates() {
        let words = extract_words("кіт, кіт; собака", &WordFilter::default());
        assert_eq!(words, vec!["кіт", "кіт", "собака"]);
    }

    #[test]
    fn test_stopwords_optional() {
        let filter = WordFilter {
            min_len: 1,
            drop_stopwords: false,
        };
        assert_eq!(extract_words("the cat", &filter), vec!["the", "cat"]);
        assert_eq!(
            extract_words("the cat", &WordFilter::default()),
            vec!["cat"]
        );
    }
}
