use std::collections::HashMap;

use serde::Deserialize;
use zhuyi_core::{DictEntry, DictionaryMetadata, LoadError, Token, WordInfo};

use crate::lookup;
use crate::segmenter;

/// Word -> entry table as shipped in the CC-CEDICT / CVDICT JSON exports
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct DictTable {
    entries: HashMap<String, DictEntry>,
}

impl DictTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `word -> {pinyin, definition, trad?}`
    pub fn from_json(name: &str, json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|source| LoadError::Parse {
            dataset: name.to_string(),
            source,
        })
    }

    pub fn get(&self, word: &str) -> Option<&DictEntry> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn insert(&mut self, word: &str, entry: DictEntry) {
        self.entries.insert(word.to_string(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<W: Into<String>> FromIterator<(W, DictEntry)> for DictTable {
    fn from_iter<I: IntoIterator<Item = (W, DictEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(w, e)| (w.into(), e)).collect(),
        }
    }
}

/// The four lookup tables, immutable once built
#[derive(Debug, Clone, Default)]
pub struct DictionaryBundle {
    pub multi_en: DictTable,
    pub single_en: DictTable,
    pub multi_vn: DictTable,
    pub single_vn: DictTable,
}

impl DictionaryBundle {
    pub fn new(
        multi_en: DictTable,
        single_en: DictTable,
        multi_vn: DictTable,
        single_vn: DictTable,
    ) -> Self {
        Self {
            multi_en,
            single_en,
            multi_vn,
            single_vn,
        }
    }

    /// Resolve a word through both language chains
    pub fn lookup(&self, word: &str) -> Option<WordInfo> {
        lookup::lookup(
            word,
            &self.multi_en,
            &self.single_en,
            &self.multi_vn,
            &self.single_vn,
        )
    }

    /// Segment against the English multi-character table
    pub fn segment(&self, text: &str) -> Vec<Token> {
        segmenter::segment(text, &self.multi_en)
    }

    pub fn metadata(&self) -> Vec<DictionaryMetadata> {
        [
            ("CC-CEDICT words", "zh-en", &self.multi_en),
            ("CC-CEDICT characters", "zh-en", &self.single_en),
            ("CVDICT words", "zh-vi", &self.multi_vn),
            ("CVDICT characters", "zh-vi", &self.single_vn),
        ]
        .into_iter()
        .map(|(name, language, table)| DictionaryMetadata {
            name: name.to_string(),
            language: language.to_string(),
            entry_count: table.len(),
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let json = r#"{
            "你好": {"pinyin": "ni3 hao3", "definition": "hello"},
            "學": {"pinyin": "xue2", "definition": "to study", "trad": "學"}
        }"#;

        let table = DictTable::from_json("cedict_full", json).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.contains("你好"));
        assert_eq!(table.get("你好").unwrap().definition, "hello");
    }

    #[test]
    fn test_from_json_reports_dataset() {
        let err = DictTable::from_json("cvdict_chars", "[1, 2]").unwrap_err();
        match err {
            LoadError::Parse { dataset, .. } => assert_eq!(dataset, "cvdict_chars"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_metadata_counts() {
        let multi_en: DictTable = [("你好", DictEntry::new("ni3 hao3", "hello"))].into_iter().collect();
        let bundle = DictionaryBundle::new(multi_en, DictTable::new(), DictTable::new(), DictTable::new());

        let counts: Vec<usize> = bundle.metadata().iter().map(|m| m.entry_count).collect();
        assert_eq!(counts, vec![1, 0, 0, 0]);
    }
}
