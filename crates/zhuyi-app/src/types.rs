use std::collections::HashSet;

use zhuyi_lang_chinese::Annotation;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw text to annotate
    TextInput(String),
    ToggleNote(String),

    // Outgoing
    ShowAnnotation {
        request_id: u64,
        annotation: Annotation,
        /// Noted words at the time the result was produced
        noted: HashSet<String>,
    },
    NoteToggled {
        word: String,
        noted: bool,
    },
    /// Message for the user, no data attached
    Status(String),
}
