use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("noted_words.json")
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NotesConfig {
    /// JSON file the noted words are persisted to
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self { path: default_path() }
    }
}
