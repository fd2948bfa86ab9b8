use serde::Serialize;

/// Text processing and lookup interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "zh", "ja", ...)
    fn language_code(&self) -> &str;

    /// Normalize raw input before tokenizing
    fn normalize(&self, text: &str) -> String;

    /// Break text into ordered tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Look up a single word, `None` when unknown
    fn lookup(&self, word: &str) -> Option<WordInfo>;
}

/// Segmentation output. Plain whitespace other than newlines never appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Token {
    /// Dictionary word or single ideograph
    Chinese(String),
    Newline,
    /// Punctuation, digits, Latin letters
    Symbol(String),
}

impl Token {
    pub fn text(&self) -> &str {
        match self {
            Token::Chinese(text) | Token::Symbol(text) => text,
            Token::Newline => "\n",
        }
    }

    pub fn is_chinese(&self) -> bool {
        matches!(self, Token::Chinese(_))
    }
}

/// Resolved pronunciation and definitions for a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordInfo {
    /// Tone-marked pinyin, "?" when the source has none
    pub pinyin: String,
    pub definition_en: Option<String>,
    pub definition_vn: Option<String>,
    pub traditional: Option<String>,
}
