pub mod dictionary;
pub mod error;
pub mod language;
pub mod notes;

pub use dictionary::{DictEntry, DictionaryMetadata};
pub use error::{LoadError, StoreError};
pub use language::{LanguageProcessor, Token, WordInfo};
pub use notes::{KeyValueStore, MemoryStore, NotedWords};
