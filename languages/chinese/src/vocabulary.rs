use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;
use zhuyi_config::{HskFilter, SortOrder};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabularyEntry {
    pub word: String,
    /// Toned reading as displayed
    pub phonetic: String,
    pub definition_en: Option<String>,
    pub definition_vn: Option<String>,
    /// 0 = not in HSK
    pub hsk_level: u8,
}

/// Collects distinct words in order of first appearance
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    entries: Vec<VocabularyEntry>,
    seen: HashSet<String>,
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the word was already collected
    pub fn insert(&mut self, entry: VocabularyEntry) -> bool {
        if !self.seen.insert(entry.word.clone()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-appearance order
    pub fn into_entries(self) -> Vec<VocabularyEntry> {
        self.entries
    }

    /// Apply filter and ordering, `None` when the filter disables the list
    pub fn finish(self, filter: HskFilter, order: SortOrder) -> Option<Vec<VocabularyEntry>> {
        if !filter.produces_list() {
            return None;
        }

        let mut entries: Vec<VocabularyEntry> = self
            .entries
            .into_iter()
            .filter(|e| filter.accepts(e.hsk_level))
            .collect();
        sort_entries(&mut entries, order);
        Some(entries)
    }
}

/// Stable sort, `Appearance` leaves the slice as is
pub fn sort_entries(entries: &mut [VocabularyEntry], order: SortOrder) {
    match order {
        SortOrder::Appearance => {}
        SortOrder::Pronunciation => {
            entries.sort_by(|a, b| compare_pronunciation(&a.phonetic, &b.phonetic))
        }
        SortOrder::Frequency => entries.sort_by_key(|e| e.hsk_level),
    }
}

/// Compare toned readings the way a collating comparison would: tone marks
/// and case are ignored first, the full string only breaks ties.
pub fn compare_pronunciation(a: &str, b: &str) -> Ordering {
    pronunciation_key(a)
        .cmp(&pronunciation_key(b))
        .then_with(|| a.cmp(b))
}

/// "Lǜ sè" -> "lu se"
pub fn pronunciation_key(reading: &str) -> String {
    reading
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
