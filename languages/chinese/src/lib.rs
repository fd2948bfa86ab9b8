pub mod annotator;
pub mod dictionary;
pub mod hsk;
pub mod loader;
pub mod lookup;
pub mod processor;
pub mod segmenter;
pub mod tone;
pub mod vocabulary;
pub mod wordlist;
pub mod zhuyin;

pub use annotator::{AnnotatedToken, AnnotatedWord, Annotation, annotate};
pub use dictionary::{DictTable, DictionaryBundle};
pub use hsk::{HskMap, level_label};
pub use loader::{ChineseData, DataLoader, DatasetSource, DefaultSource};
pub use processor::{ChineseProcessor, EXAMPLE_TEXT};
pub use tone::tone_marks;
pub use vocabulary::VocabularyEntry;
pub use wordlist::{HskWord, HskWordList};
