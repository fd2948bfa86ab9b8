use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// What the annotated text shows for each known word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    #[default]
    #[serde(alias = "pinyinAndChars")]
    PinyinAndChars,
    #[serde(alias = "pinyinOnly")]
    PinyinOnly,
    #[serde(alias = "charsOnly")]
    CharsOnly,
}

impl DisplayMode {
    pub fn shows_chars(&self) -> bool {
        !matches!(self, DisplayMode::PinyinOnly)
    }

    pub fn shows_pinyin(&self) -> bool {
        !matches!(self, DisplayMode::CharsOnly)
    }
}

impl FromStr for DisplayMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pinyin-and-chars" | "pinyinAndChars" | "both" => Ok(DisplayMode::PinyinAndChars),
            "pinyin-only" | "pinyinOnly" | "pronunciation" => Ok(DisplayMode::PinyinOnly),
            "chars-only" | "charsOnly" | "characters" => Ok(DisplayMode::CharsOnly),
            _ => Err(ConfigError::invalid("display mode", s)),
        }
    }
}

/// Which definition languages are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranslationLanguage {
    #[default]
    Both,
    #[serde(alias = "englishOnly", alias = "english")]
    EnglishOnly,
    #[serde(alias = "vietnameseOnly", alias = "vietnamese")]
    VietnameseOnly,
    None,
}

impl TranslationLanguage {
    pub fn wants_english(&self) -> bool {
        matches!(self, TranslationLanguage::Both | TranslationLanguage::EnglishOnly)
    }

    pub fn wants_vietnamese(&self) -> bool {
        matches!(self, TranslationLanguage::Both | TranslationLanguage::VietnameseOnly)
    }
}

impl FromStr for TranslationLanguage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(TranslationLanguage::Both),
            "english-only" | "englishOnly" | "english" | "en" => Ok(TranslationLanguage::EnglishOnly),
            "vietnamese-only" | "vietnameseOnly" | "vietnamese" | "vn" | "vi" => {
                Ok(TranslationLanguage::VietnameseOnly)
            }
            "none" => Ok(TranslationLanguage::None),
            _ => Err(ConfigError::invalid("translation language", s)),
        }
    }
}

/// Vocabulary list filter by HSK level
///
/// `None` turns the vocabulary list off entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HskFilter {
    None,
    /// Keep words at this level or above (1-6), advanced words included
    AtLeast(u8),
    NotInHsk,
}

impl Default for HskFilter {
    fn default() -> Self {
        HskFilter::AtLeast(1)
    }
}

impl HskFilter {
    /// Whether a vocabulary list is produced at all
    pub fn produces_list(&self) -> bool {
        !matches!(self, HskFilter::None)
    }

    /// Whether a word at `level` (0 = not in HSK) passes the filter
    pub fn accepts(&self, level: u8) -> bool {
        match self {
            HskFilter::None => false,
            HskFilter::AtLeast(min) => level >= *min,
            HskFilter::NotInHsk => level == 0,
        }
    }
}

impl fmt::Display for HskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HskFilter::None => f.write_str("none"),
            HskFilter::AtLeast(level) => write!(f, "hsk{level}"),
            HskFilter::NotInHsk => f.write_str("not-in-hsk"),
        }
    }
}

impl FromStr for HskFilter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(HskFilter::None),
            "not-in-hsk" | "notInHsk" | "not-hsk" => Ok(HskFilter::NotInHsk),
            _ => s
                .strip_prefix("hsk")
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| (1..=6).contains(n))
                .map(HskFilter::AtLeast)
                .ok_or_else(|| ConfigError::invalid("HSK filter", s)),
        }
    }
}

impl TryFrom<String> for HskFilter {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HskFilter> for String {
    fn from(value: HskFilter) -> Self {
        value.to_string()
    }
}

/// Vocabulary list ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Appearance,
    Pronunciation,
    /// Ascending HSK level, "not in HSK" first
    Frequency,
}

impl FromStr for SortOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "appearance" => Ok(SortOrder::Appearance),
            "pronunciation" | "pinyin" => Ok(SortOrder::Pronunciation),
            "frequency" | "hsk" => Ok(SortOrder::Frequency),
            _ => Err(ConfigError::invalid("sort order", s)),
        }
    }
}

/// Phonetic system used for readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhoneticSystem {
    #[default]
    Pinyin,
    Zhuyin,
}

impl FromStr for PhoneticSystem {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pinyin" => Ok(PhoneticSystem::Pinyin),
            "zhuyin" | "bopomofo" => Ok(PhoneticSystem::Zhuyin),
            _ => Err(ConfigError::invalid("phonetic system", s)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotateConfig {
    pub display_mode: DisplayMode,
    pub translation: TranslationLanguage,
    /// Put a separator after every Chinese word
    pub insert_spaces: bool,
    pub hsk_filter: HskFilter,
    pub sort_order: SortOrder,
    pub phonetic: PhoneticSystem,
}
