use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::dictionary::DictionaryBundle;
use crate::hsk::{HskMap, MAX_LEVEL};
use crate::vocabulary::compare_pronunciation;

pub const DEFAULT_SAMPLE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HskWord {
    pub word: String,
    pub pinyin: String,
    pub definition_en: Option<String>,
    pub definition_vn: Option<String>,
    pub level: u8,
}

impl HskWord {
    fn matches(&self, query: &str) -> bool {
        let contains = |s: &str| s.to_lowercase().contains(query);

        contains(&self.word)
            || contains(&self.pinyin)
            || self.definition_en.as_deref().is_some_and(contains)
            || self.definition_vn.as_deref().is_some_and(contains)
    }
}

/// HSK words with dictionary data, grouped by level and sorted by pinyin
#[derive(Debug, Clone, Default)]
pub struct HskWordList {
    levels: BTreeMap<u8, Vec<HskWord>>,
}

impl HskWordList {
    /// Words the dictionaries do not know, and levels above 6, are left out
    pub fn build(hsk: &HskMap, dictionaries: &DictionaryBundle) -> Self {
        let mut levels: BTreeMap<u8, Vec<HskWord>> =
            (1..=MAX_LEVEL).map(|level| (level, Vec::new())).collect();

        for (word, level) in hsk.iter() {
            let Some(info) = dictionaries.lookup(word) else {
                continue;
            };
            if let Some(words) = levels.get_mut(&level) {
                words.push(HskWord {
                    word: word.to_string(),
                    pinyin: info.pinyin,
                    definition_en: info.definition_en,
                    definition_vn: info.definition_vn,
                    level,
                });
            }
        }

        for words in levels.values_mut() {
            words.sort_by(|a, b| compare_pronunciation(&a.pinyin, &b.pinyin));
        }

        tracing::debug!(
            "Built HSK word list: {:?}",
            levels.iter().map(|(l, w)| (*l, w.len())).collect::<Vec<_>>()
        );

        Self { levels }
    }

    pub fn total(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }

    pub fn count(&self, level: u8) -> usize {
        self.levels.get(&level).map_or(0, Vec::len)
    }

    pub fn level(&self, level: u8) -> &[HskWord] {
        self.levels.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Level 1 first, pinyin order within a level
    pub fn all(&self) -> impl Iterator<Item = &HskWord> {
        self.levels.values().flatten()
    }

    /// Case-insensitive substring search, a blank query returns everything
    pub fn search(&self, query: &str) -> Vec<&HskWord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.all().collect();
        }
        self.all().filter(|w| w.matches(&query)).collect()
    }

    /// Up to `count` random words, optionally from a single level
    pub fn sample<R: Rng + ?Sized>(
        &self,
        count: usize,
        level: Option<u8>,
        rng: &mut R,
    ) -> Vec<&HskWord> {
        let mut pool: Vec<&HskWord> = match level {
            Some(level) => self.level(level).iter().collect(),
            None => self.all().collect(),
        };
        pool.shuffle(rng);
        pool.truncate(count);
        pool
    }
}
