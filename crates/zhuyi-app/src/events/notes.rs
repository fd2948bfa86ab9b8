use kanal::AsyncSender;
use zhuyi_core::{LanguageProcessor, StoreError};

use crate::render::{NoteLine, joined_definition};
use crate::state::AppState;
use crate::types::AppEvent;

/// Flip a word in the notes and announce the new state.
///
/// Store failures are returned untouched so the caller can report them and carry on.
pub async fn handle_toggle_note(
    state: &AppState,
    word: &str,
    app_tx: &AsyncSender<AppEvent>,
) -> Result<(), StoreError> {
    let word = word.trim();
    if word.is_empty() {
        return Ok(());
    }

    let noted = state.notes.lock().await.toggle(word)?;
    tracing::info!("{} {}", if noted { "Noted" } else { "Un-noted" }, word);

    let event = AppEvent::NoteToggled {
        word: word.to_string(),
        noted,
    };
    if app_tx.send(event).await.is_err() {
        tracing::debug!("Output closed before note toggle of {} was shown", word);
    }
    Ok(())
}

/// Noted words resolved through the dictionaries, in the order they were added.
///
/// Words the dictionaries do not know stay noted but are not listed.
pub async fn note_lines(state: &AppState) -> anyhow::Result<Vec<NoteLine>> {
    let words = state.notes.lock().await.words().to_vec();
    if words.is_empty() {
        return Ok(Vec::new());
    }

    let processor = state.processor().await?;
    let translation = state.annotate_config().await.translation;

    Ok(words
        .into_iter()
        .filter_map(|word| {
            let Some(info) = processor.lookup(&word) else {
                tracing::debug!("Noted word {} has no dictionary entry", word);
                return None;
            };
            Some(NoteLine {
                definition: joined_definition(
                    info.definition_en.as_deref(),
                    info.definition_vn.as_deref(),
                    translation,
                ),
                pinyin: info.pinyin,
                word,
            })
        })
        .collect())
}
