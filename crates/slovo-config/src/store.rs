use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "words.json".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Store file, relative paths resolve against the slovo home directory
    #[serde(default = "default_path")]
    pub path: String,
    /// Keep everything in memory, nothing is written to disk
    #[serde(default)]
    pub in_memory: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            in_memory: false,
        }
    }
}
