use slovo_translator::TranslateError;
use slovo_types::WordId;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("word is empty")]
    EmptyWord,

    #[error("word with id {0} not found")]
    NotFound(WordId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no words selected")]
    EmptySelection,
}

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("dictionary is empty, nothing to export")]
    EmptyDictionary,

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("import must be a JSON array")]
    NotAnArray,

    #[error("import array is empty")]
    EmptyArray,

    #[error("entry {index} is invalid: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("expected a .json file, got {0}")]
    NotJsonFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("word with id {0} not found")]
    NotFound(WordId),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("translation failed: {0}")]
    Translation(#[from] TranslateError),
}
