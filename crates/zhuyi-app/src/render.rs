use std::collections::HashSet;
use std::fmt::Write as _;

use serde::Serialize;
use zhuyi_config::{AnnotateConfig, DisplayMode, TranslationLanguage};
use zhuyi_lang_chinese::hsk::MAX_LEVEL;
use zhuyi_lang_chinese::{
    AnnotatedToken, AnnotatedWord, Annotation, HskWord, HskWordList, VocabularyEntry,
    level_label,
};

pub const EMPTY_INPUT: &str = "Please enter some Chinese text to annotate.";
pub const NO_CONTENT: &str = "No content to display.";
pub const NO_VOCABULARY: &str = "No vocabulary matching the filter criteria.";
pub const NO_NOTES: &str = "No noted words yet.";
pub const NO_WORDS: &str = "No words found.";
pub const DEFINITION_MISSING: &str = "Definition not available";

/// Noted words are wrapped in this marker inside the annotated passage
pub const NOTE_MARKER: &str = "*";

/// A noted word resolved for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteLine {
    pub word: String,
    pub pinyin: String,
    pub definition: String,
}

/// Tagged definition lines for the chosen translation language.
///
/// A single selected language always yields a line, with a placeholder when
/// the dictionaries have nothing. `Both` lists only what exists.
pub fn definition_lines(
    en: Option<&str>,
    vn: Option<&str>,
    translation: TranslationLanguage,
) -> Vec<String> {
    let single = translation != TranslationLanguage::Both;
    let languages = [
        ("en", en, translation.wants_english(), "English"),
        ("vn", vn, translation.wants_vietnamese(), "Vietnamese"),
    ];

    languages
        .into_iter()
        .filter(|(_, _, wanted, _)| *wanted)
        .filter_map(|(tag, def, _, name)| match def {
            Some(def) => Some(format!("[{tag}] {def}")),
            None if single => Some(format!("[{tag}] {name} definition not available")),
            None => None,
        })
        .collect()
}

/// One-line definition, `Both` joins the two languages with " | "
pub fn joined_definition(
    en: Option<&str>,
    vn: Option<&str>,
    translation: TranslationLanguage,
) -> String {
    let joined = match translation {
        TranslationLanguage::Both => [en, vn].into_iter().flatten().collect::<Vec<_>>().join(" | "),
        TranslationLanguage::EnglishOnly => en.unwrap_or_default().to_string(),
        TranslationLanguage::VietnameseOnly => vn.unwrap_or_default().to_string(),
        TranslationLanguage::None => return String::new(),
    };

    if joined.is_empty() {
        DEFINITION_MISSING.to_string()
    } else {
        joined
    }
}

fn render_word(word: &AnnotatedWord, mode: DisplayMode, noted: bool) -> String {
    let rendered = match &word.phonetic {
        Some(phonetic) if !mode.shows_chars() => phonetic.clone(),
        Some(phonetic) if mode.shows_pinyin() => format!("{}({})", word.text, phonetic),
        _ => word.text.clone(),
    };

    if noted {
        format!("{NOTE_MARKER}{rendered}{NOTE_MARKER}")
    } else {
        rendered
    }
}

fn render_vocabulary_entry(out: &mut String, entry: &VocabularyEntry, config: &AnnotateConfig) {
    let _ = writeln!(
        out,
        "{}  {}  [{}]",
        entry.word,
        entry.phonetic,
        level_label(entry.hsk_level)
    );
    for line in definition_lines(
        entry.definition_en.as_deref(),
        entry.definition_vn.as_deref(),
        config.translation,
    ) {
        let _ = writeln!(out, "    {line}");
    }
}

/// The annotated passage alone, noted words marked
pub fn render_passage(annotation: &Annotation, mode: DisplayMode, noted: &HashSet<String>) -> String {
    let mut passage = String::new();
    for token in &annotation.tokens {
        match token {
            AnnotatedToken::Word(word) => {
                passage.push_str(&render_word(word, mode, noted.contains(&word.text)))
            }
            AnnotatedToken::Text { text } => passage.push_str(text),
            AnnotatedToken::LineBreak => passage.push('\n'),
            AnnotatedToken::Separator => passage.push(' '),
        }
    }

    let mut out = if passage.trim().is_empty() {
        NO_CONTENT.to_string()
    } else {
        passage.trim_end().to_string()
    };
    out.push('\n');
    out
}

/// Plain-text rendering: annotated passage, then the vocabulary list
pub fn render_annotation(
    annotation: &Annotation,
    config: &AnnotateConfig,
    noted: &HashSet<String>,
) -> String {
    let mut out = render_passage(annotation, config.display_mode, noted);

    if let Some(vocabulary) = &annotation.vocabulary {
        out.push_str("\nVocabulary\n");
        if vocabulary.is_empty() {
            let _ = writeln!(out, "{NO_VOCABULARY}");
        }
        for entry in vocabulary {
            render_vocabulary_entry(&mut out, entry, config);
        }
    }

    out
}

pub fn render_notes(notes: &[NoteLine]) -> String {
    if notes.is_empty() {
        return format!("{NO_NOTES}\n");
    }

    let mut out = String::new();
    for note in notes {
        let _ = writeln!(out, "{}  {}  {}", note.word, note.pinyin, note.definition);
    }
    out
}

pub fn render_words(words: &[&HskWord], translation: TranslationLanguage) -> String {
    if words.is_empty() {
        return format!("{NO_WORDS}\n");
    }

    let mut out = String::new();
    for word in words {
        let _ = writeln!(
            out,
            "{}  {}  [{}]  {}",
            word.word,
            word.pinyin,
            level_label(word.level),
            joined_definition(
                word.definition_en.as_deref(),
                word.definition_vn.as_deref(),
                translation
            )
        );
    }
    out
}

/// Total and per-level counts
pub fn render_word_counts(list: &HskWordList) -> String {
    let mut out = format!("Total: {} words\n", list.total());
    for level in 1..=MAX_LEVEL {
        let _ = writeln!(out, "{}: {}", level_label(level), list.count(level));
    }
    out
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
