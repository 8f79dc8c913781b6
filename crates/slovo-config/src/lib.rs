use std::env;

use serde::{Deserialize, Serialize};

use self::enrichment::EnrichmentConfig;
use self::log::LogConfig;
use self::ocr::OcrConfig;
use self::store::StoreConfig;
use self::translator::TranslatorConfig;

pub mod enrichment;
pub mod log;
pub mod ocr;
pub mod store;
pub mod translator;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub translator: TranslatorConfig,
    pub enrichment: EnrichmentConfig,
    pub ocr: OcrConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults overridden by `SLOVO_*` environment variables
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Apply environment overrides on top of whatever was loaded
    pub fn apply_env(&mut self) {
        if let Ok(path) = env::var("SLOVO_STORE_PATH") {
            self.store.path = path;
        }

        if let Ok(provider) = env::var("SLOVO_TRANSLATOR") {
            self.translator.provider = provider;
        }
        if let Ok(from) = env::var("SLOVO_FROM_LANG") {
            self.translator.from_lang = from;
        }
        if let Ok(to) = env::var("SLOVO_TO_LANG") {
            self.translator.to_lang = to;
        }
        if let Ok(key) = env::var("SLOVO_API_KEY") {
            self.translator.api_key = key;
        }
        if let Ok(url) = env::var("SLOVO_API_URL") {
            self.translator.api_url = Some(url);
        }
        if let Ok(model) = env::var("SLOVO_LLM_MODEL") {
            self.translator.model = model;
        }
        if let Ok(email) = env::var("SLOVO_CONTACT_EMAIL") {
            self.translator.contact_email = Some(email);
        }
        if let Some(timeout) = env::var("SLOVO_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.translator.timeout_seconds = timeout;
        }

        if let Some(delay) = env::var("SLOVO_DELAY_MS").ok().and_then(|v| v.parse().ok()) {
            self.enrichment.delay_ms = delay;
        }

        if let Ok(filter) = env::var("SLOVO_LOG") {
            self.log.filter = filter;
        }
    }
}
