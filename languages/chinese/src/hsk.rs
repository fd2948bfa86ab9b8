use std::collections::HashMap;

use serde::Deserialize;
use zhuyi_core::LoadError;

/// Highest level of the HSK 2.0 scale, the range the word list covers
pub const MAX_LEVEL: u8 = 6;

/// One record of the complete-hsk-vocabulary export
#[derive(Debug, Clone, Deserialize)]
pub struct HskSourceEntry {
    #[serde(default)]
    pub simplified: String,
    /// Tags like "new-1" (HSK 3.0) or "old-3" (HSK 2.0)
    #[serde(default)]
    pub level: Vec<String>,
}

/// Pick a level from the tag list.
///
/// The first `new-N` tag decides and ends the scan. `old-N` tags set the
/// level and the scan goes on, so with no `new-` tag the last `old-` wins.
pub fn resolve_level<S: AsRef<str>>(tags: &[S]) -> Option<u8> {
    let mut level = None;

    for tag in tags {
        let tag = tag.as_ref();
        if let Some(n) = tag.strip_prefix("new-") {
            level = leading_number(n);
            break;
        } else if let Some(n) = tag.strip_prefix("old-") {
            level = leading_number(n);
        }
    }

    level
}

/// "7-9" -> 7
fn leading_number(s: &str) -> Option<u8> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

/// "HSK 3" or "Not in HSK"
pub fn level_label(level: u8) -> String {
    if level == 0 {
        "Not in HSK".to_string()
    } else {
        format!("HSK {level}")
    }
}

/// Word -> HSK level, absent words are level 0.
///
/// HSK 3.0 advanced words (`new-7-9`) keep level 7 and count as above HSK 6.
#[derive(Debug, Clone, Default)]
pub struct HskMap {
    levels: HashMap<String, u8>,
    /// Words in source order
    order: Vec<String>,
}

impl HskMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from source records, dropping words without a level tag
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = HskSourceEntry>,
    {
        let mut map = Self::new();

        for entry in entries {
            if entry.simplified.is_empty() {
                continue;
            }
            match resolve_level(&entry.level) {
                Some(level) if level > 0 => map.insert(&entry.simplified, level),
                _ => {}
            }
        }

        map
    }

    /// Parse the JSON array export
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let entries: Vec<HskSourceEntry> =
            serde_json::from_str(json).map_err(|source| LoadError::Parse {
                dataset: "hsk".to_string(),
                source,
            })?;
        Ok(Self::from_entries(entries))
    }

    /// Later inserts of the same word overwrite the level, keeping its position
    pub fn insert(&mut self, word: &str, level: u8) {
        if self.levels.insert(word.to_string(), level).is_none() {
            self.order.push(word.to_string());
        }
    }

    /// 0 when the word is not in HSK
    pub fn level(&self, word: &str) -> u8 {
        self.levels.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.levels.contains_key(word)
    }

    /// (word, level) in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.order
            .iter()
            .map(move |word| (word.as_str(), self.level(word)))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tag_short_circuits() {
        assert_eq!(resolve_level(&["old-3", "new-1"]), Some(1));
        assert_eq!(resolve_level(&["new-2", "old-5", "new-4"]), Some(2));
    }

    #[test]
    fn test_last_old_tag_wins() {
        assert_eq!(resolve_level(&["old-2", "old-4"]), Some(4));
    }

    #[test]
    fn test_no_tags() {
        let empty: [&str; 0] = [];
        assert_eq!(resolve_level(&empty), None);
        assert_eq!(resolve_level(&["other"]), None);
    }

    #[test]
    fn test_banded_tag() {
        assert_eq!(resolve_level(&["new-7-9"]), Some(7));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"simplified": "爱", "level": ["new-1", "old-1"]},
            {"simplified": "爱好", "level": ["old-3", "new-2"]},
            {"simplified": "安排", "level": ["old-2", "old-4"]},
            {"simplified": "按照", "level": ["new-7"]},
            {"simplified": "", "level": ["new-1"]},
            {"simplified": "白", "level": []}
        ]"#;

        let map = HskMap::from_json(json).unwrap();
        assert_eq!(map.level("爱"), 1);
        assert_eq!(map.level("爱好"), 2);
        assert_eq!(map.level("安排"), 4);
        assert_eq!(map.level("按照"), 7);
        assert_eq!(map.level("白"), 0);
        assert_eq!(map.len(), 4);

        let words: Vec<&str> = map.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["爱", "爱好", "安排", "按照"]);
    }

    #[test]
    fn test_advanced_words_rank_above_hsk6() {
        let map = HskMap::from_json(r#"[{"simplified": "按照", "level": ["new-7-9"]}]"#).unwrap();

        assert_eq!(map.level("按照"), 7);
        assert_eq!(level_label(map.level("按照")), "HSK 7");
    }

    #[test]
    fn test_labels() {
        assert_eq!(level_label(0), "Not in HSK");
        assert_eq!(level_label(5), "HSK 5");
    }
}
