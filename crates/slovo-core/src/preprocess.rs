use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // NFC only, compatibility forms are left to the caller
        let text: String = text.nfc().collect();

        // OCR line breaks inside a phrase become single spaces
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct WordNormalizer;
impl Preprocessor for WordNormalizer {}

/// Canonical stored form of a word
pub fn normalize_word(text: &str) -> String {
    WordNormalizer.process(text)
}
