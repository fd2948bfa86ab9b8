use rand::Rng;
use zhuyi_lang_chinese::{HskWord, HskWordList};

/// What to pull out of the HSK word list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordListQuery {
    pub level: Option<u8>,
    pub search: Option<String>,
    /// Random sample size, takes precedence over `search`
    pub random: Option<usize>,
}

pub fn select_words<'a, R: Rng + ?Sized>(
    list: &'a HskWordList,
    query: &WordListQuery,
    rng: &mut R,
) -> Vec<&'a HskWord> {
    if let Some(count) = query.random {
        return list.sample(count, query.level, rng);
    }

    let mut words = match &query.search {
        Some(search) => list.search(search),
        None => list.all().collect(),
    };
    if let Some(level) = query.level {
        words.retain(|w| w.level == level);
    }
    words
}
