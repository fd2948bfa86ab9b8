use std::sync::Arc;

use unicode_normalization::UnicodeNormalization;
use zhuyi_config::AnnotateConfig;
use zhuyi_core::{LanguageProcessor, Token, WordInfo};

use crate::annotator::{self, Annotation};
use crate::loader::ChineseData;
use crate::wordlist::HskWordList;

/// Short passage for trying the annotator out
pub const EXAMPLE_TEXT: &str = "你好世界！学习中文很有趣。今天天气很好。我们一起学习汉语吧！";

/// Chinese processor over loaded datasets
#[derive(Clone)]
pub struct ChineseProcessor {
    data: Arc<ChineseData>,
}

impl ChineseProcessor {
    pub fn new(data: Arc<ChineseData>) -> Self {
        Self { data }
    }

    /// Normalize and annotate, `None` when nothing is left after trimming
    pub fn annotate(&self, text: &str, config: &AnnotateConfig) -> Option<Annotation> {
        let text = self.normalize(text);
        if text.is_empty() {
            return None;
        }

        Some(annotator::annotate(
            &text,
            &self.data.dictionaries,
            &self.data.hsk,
            config,
        ))
    }

    /// 0 when the word is not in HSK
    pub fn hsk_level(&self, word: &str) -> u8 {
        self.data.hsk.level(word)
    }

    pub fn word_list(&self) -> HskWordList {
        HskWordList::build(&self.data.hsk, &self.data.dictionaries)
    }
}

impl LanguageProcessor for ChineseProcessor {
    fn language_code(&self) -> &str {
        "zh"
    }

    fn normalize(&self, text: &str) -> String {
        text.nfc().collect::<String>().trim().to_string()
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.data.dictionaries.segment(&self.normalize(text))
    }

    fn lookup(&self, word: &str) -> Option<WordInfo> {
        self.data.dictionaries.lookup(word)
    }
}
