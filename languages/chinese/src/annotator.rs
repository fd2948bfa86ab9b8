use serde::Serialize;
use zhuyi_config::{AnnotateConfig, PhoneticSystem};
use zhuyi_core::{Token, WordInfo};

use crate::dictionary::DictionaryBundle;
use crate::hsk::HskMap;
use crate::vocabulary::{VocabularyBuilder, VocabularyEntry};
use crate::zhuyin::to_zhuyin;

/// A Chinese token with whatever the dictionaries know about it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedWord {
    pub text: String,
    /// `None` for unknown words
    pub phonetic: Option<String>,
    pub definition_en: Option<String>,
    pub definition_vn: Option<String>,
    pub traditional: Option<String>,
    pub unknown: bool,
}

impl AnnotatedWord {
    fn known(text: &str, info: WordInfo) -> Self {
        Self {
            text: text.to_string(),
            phonetic: Some(info.pinyin),
            definition_en: info.definition_en,
            definition_vn: info.definition_vn,
            traditional: info.traditional,
            unknown: false,
        }
    }

    fn unknown(text: &str) -> Self {
        Self {
            text: text.to_string(),
            phonetic: None,
            definition_en: None,
            definition_vn: None,
            traditional: None,
            unknown: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnnotatedToken {
    Word(AnnotatedWord),
    /// Non-Chinese text, passed through verbatim
    Text { text: String },
    LineBreak,
    /// Word spacing, only emitted with `insert_spaces`
    Separator,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Annotation {
    pub tokens: Vec<AnnotatedToken>,
    /// `None` when the HSK filter turns the list off
    pub vocabulary: Option<Vec<VocabularyEntry>>,
}

impl Annotation {
    pub fn words(&self) -> impl Iterator<Item = &AnnotatedWord> {
        self.tokens.iter().filter_map(|t| match t {
            AnnotatedToken::Word(word) => Some(word),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Segment `text`, look up every Chinese token and collect the vocabulary.
///
/// Unknown words stay in the output flagged as such and never enter the
/// vocabulary.
pub fn annotate(
    text: &str,
    dictionaries: &DictionaryBundle,
    hsk: &HskMap,
    config: &AnnotateConfig,
) -> Annotation {
    let segments = dictionaries.segment(text);
    tracing::debug!("Segmented into {} tokens", segments.len());

    let mut tokens = Vec::with_capacity(segments.len());
    let mut vocabulary = VocabularyBuilder::new();

    for segment in segments {
        match segment {
            Token::Chinese(word) => {
                let annotated = match dictionaries.lookup(&word) {
                    Some(mut info) => {
                        if config.phonetic == PhoneticSystem::Zhuyin {
                            info.pinyin = to_zhuyin(&info.pinyin);
                        }

                        if !vocabulary.contains(&word) {
                            vocabulary.insert(VocabularyEntry {
                                word: word.clone(),
                                phonetic: info.pinyin.clone(),
                                definition_en: info.definition_en.clone(),
                                definition_vn: info.definition_vn.clone(),
                                hsk_level: hsk.level(&word),
                            });
                        }
                        AnnotatedWord::known(&word, info)
                    }
                    None => AnnotatedWord::unknown(&word),
                };

                tokens.push(AnnotatedToken::Word(annotated));
                if config.insert_spaces {
                    tokens.push(AnnotatedToken::Separator);
                }
            }
            Token::Newline => tokens.push(AnnotatedToken::LineBreak),
            Token::Symbol(text) => tokens.push(AnnotatedToken::Text { text }),
        }
    }

    tracing::debug!("Collected {} vocabulary words", vocabulary.len());

    Annotation {
        tokens,
        vocabulary: vocabulary.finish(config.hsk_filter, config.sort_order),
    }
}
