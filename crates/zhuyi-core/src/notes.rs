use std::collections::HashMap;

use crate::error::StoreError;

/// Key under which the noted words list is stored
pub const NOTES_KEY: &str = "notedWords";

/// Minimal get/set persistence contract
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, nothing survives the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Words the user marked for study, in insertion order.
///
/// Every mutation is written through to the backing store. A failed write
/// leaves the list as it was.
pub struct NotedWords<S: KeyValueStore> {
    store: S,
    words: Vec<String>,
}

impl<S: KeyValueStore> NotedWords<S> {
    /// Load from the store. A missing or unreadable value starts an empty set.
    pub fn load(store: S) -> Self {
        let words = match store.get(NOTES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(list) => dedup_in_order(list),
                Err(e) => {
                    tracing::warn!("Ignoring corrupt noted words: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read noted words: {}", e);
                Vec::new()
            }
        };

        Self { store, words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Returns false if the word was already noted
    pub fn add(&mut self, word: &str) -> Result<bool, StoreError> {
        if self.contains(word) {
            return Ok(false);
        }
        let mut words = self.words.clone();
        words.push(word.to_string());
        self.commit(words)?;
        Ok(true)
    }

    /// Returns false if the word was not noted
    pub fn remove(&mut self, word: &str) -> Result<bool, StoreError> {
        if !self.contains(word) {
            return Ok(false);
        }
        let words = self.words.iter().filter(|w| *w != word).cloned().collect();
        self.commit(words)?;
        Ok(true)
    }

    /// Flip membership, returns whether the word is noted afterwards
    pub fn toggle(&mut self, word: &str) -> Result<bool, StoreError> {
        if self.contains(word) {
            self.remove(word)?;
            Ok(false)
        } else {
            self.add(word)?;
            Ok(true)
        }
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        if self.words.is_empty() {
            return Ok(());
        }
        self.commit(Vec::new())
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Persist `words`, replacing the in-memory list only once the store accepted it
    fn commit(&mut self, words: Vec<String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&words)?;
        self.store.set(NOTES_KEY, &raw)?;
        self.words = words;
        Ok(())
    }
}

fn dedup_in_order(list: Vec<String>) -> Vec<String> {
    let mut words: Vec<String> = Vec::with_capacity(list.len());
    for word in list {
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words
}
