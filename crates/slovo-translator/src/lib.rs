use std::time::Duration;

pub mod allow_list;
pub mod deepl;
pub mod gateway;
pub mod llm;
pub mod mock;
pub mod mymemory;
pub mod quality;

pub use deepl::DeepLTranslator;
pub use gateway::TranslationGateway;
pub use llm::LlmTranslator;
pub use mock::{MockMode, MockTranslator};
pub use mymemory::MyMemoryTranslator;
pub use quality::Rejection;

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
    pub confidence: Option<f32>,
    pub alternatives: Vec<String>,
}

/// How a provider produces text, decides which quality checks apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Dictionary or statistical MT service
    MachineTranslation,
    /// Chat model prompted to translate
    Llm,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub kind: ProviderKind,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Rejected translation: {0}")]
    Rejected(#[from] Rejection),

    #[error("Nothing to translate")]
    EmptyInput,

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}
