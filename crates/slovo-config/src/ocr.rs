use serde::{Deserialize, Serialize};

fn default_min_word_len() -> usize {
    2
}

fn default_select_min() -> usize {
    3
}

fn default_select_max() -> usize {
    15
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    /// Shorter tokens are dropped before words reach the picker
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,
    /// Drop common English function words
    #[serde(default)]
    pub keep_stopwords: bool,
    /// Length window used by "select by length" in the picker
    #[serde(default = "default_select_min")]
    pub select_min_len: usize,
    #[serde(default = "default_select_max")]
    pub select_max_len: usize,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            min_word_len: default_min_word_len(),
            keep_stopwords: false,
            select_min_len: default_select_min(),
            select_max_len: default_select_max(),
        }
    }
}
