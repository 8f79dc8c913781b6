use serde::{Deserialize, Serialize};

fn default_filter() -> String {
    "slovo=info".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    /// Used when RUST_LOG is not set
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}
