use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_delay_ms() -> u64 {
    350
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Translate new words in the background after a commit
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Pause between two upstream requests
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            delay_ms: default_delay_ms(),
        }
    }
}
