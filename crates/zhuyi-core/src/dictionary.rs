use serde::{Deserialize, Serialize};

/// One dictionary record, keyed externally by its simplified form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    /// Numbered-tone pinyin, e.g. "ni3 hao3"
    #[serde(default)]
    pub pinyin: Option<String>,
    #[serde(default)]
    pub definition: String,
    #[serde(default, rename = "trad", alias = "traditional")]
    pub traditional: Option<String>,
}

impl DictEntry {
    pub fn new(pinyin: &str, definition: &str) -> Self {
        Self {
            pinyin: Some(pinyin.to_string()),
            definition: definition.to_string(),
            traditional: None,
        }
    }

    pub fn with_traditional(mut self, traditional: &str) -> Self {
        self.traditional = Some(traditional.to_string());
        self
    }
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
}
