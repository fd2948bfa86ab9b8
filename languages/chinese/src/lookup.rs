use zhuyi_core::{DictEntry, WordInfo};

use crate::dictionary::DictTable;
use crate::tone::tone_marks;

/// Shown when an entry carries no pinyin
pub const MISSING_PINYIN: &str = "?";

/// One step of a fallback chain
#[derive(Debug, Clone, Copy)]
pub struct LookupStep<'a> {
    table: &'a DictTable,
    single_char_only: bool,
}

impl<'a> LookupStep<'a> {
    /// Consulted for any word
    pub fn any(table: &'a DictTable) -> Self {
        Self {
            table,
            single_char_only: false,
        }
    }

    /// Consulted only for one-character words
    pub fn single_char(table: &'a DictTable) -> Self {
        Self {
            table,
            single_char_only: true,
        }
    }

    fn resolve(&self, word: &str) -> Option<&'a DictEntry> {
        if self.single_char_only && word.chars().count() != 1 {
            return None;
        }
        self.table.get(word)
    }
}

/// Ordered list of steps, the first hit wins
#[derive(Debug, Clone)]
pub struct LookupChain<'a> {
    steps: Vec<LookupStep<'a>>,
}

impl<'a> LookupChain<'a> {
    pub fn new(steps: Vec<LookupStep<'a>>) -> Self {
        Self { steps }
    }

    /// Word table first, character table for single characters
    pub fn word_then_char(words: &'a DictTable, chars: &'a DictTable) -> Self {
        Self::new(vec![LookupStep::any(words), LookupStep::single_char(chars)])
    }

    pub fn resolve(&self, word: &str) -> Option<&'a DictEntry> {
        self.steps.iter().find_map(|step| step.resolve(word))
    }
}

/// Resolve a word against the English and Vietnamese tables.
///
/// Pinyin and traditional form come from the English hit when there is one,
/// the definitions of each language are kept independently.
pub fn lookup(
    word: &str,
    multi_en: &DictTable,
    single_en: &DictTable,
    multi_vn: &DictTable,
    single_vn: &DictTable,
) -> Option<WordInfo> {
    if word.is_empty() {
        return None;
    }

    let english = LookupChain::word_then_char(multi_en, single_en).resolve(word);
    let vietnamese = LookupChain::word_then_char(multi_vn, single_vn).resolve(word);

    let primary = english.or(vietnamese)?;

    let pinyin = primary
        .pinyin
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(tone_marks)
        .unwrap_or_else(|| MISSING_PINYIN.to_string());

    Some(WordInfo {
        pinyin,
        definition_en: english.map(|e| e.definition.clone()),
        definition_vn: vietnamese.map(|e| e.definition.clone()),
        traditional: primary.traditional.clone(),
    })
}
