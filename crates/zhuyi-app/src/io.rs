use std::collections::HashSet;
use std::io::Write;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use zhuyi_config::AnnotateConfig;
use zhuyi_lang_chinese::Annotation;

use crate::render::{render_annotation, render_json, render_passage};
use crate::types::AppEvent;

/// Lines starting with this toggle the rest of the line in the notes
pub const NOTE_PREFIX: &str = "/note ";

/// Classify one input line
pub fn parse_line(line: &str) -> AppEvent {
    match line.strip_prefix(NOTE_PREFIX) {
        Some(word) => AppEvent::ToggleNote(word.trim().to_string()),
        None => AppEvent::TextInput(line.to_string()),
    }
}

/// Forward input lines as events until EOF or cancellation
pub async fn watcher_io<R>(
    reader: R,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter Chinese text, one passage per line ({NOTE_PREFIX}<word> toggles a note):");
    }

    let mut lines = reader.lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = cancel.cancelled() => {
                tracing::info!("Input watcher stopping");
                break;
            }
        };

        let Some(line) = line else {
            tracing::debug!("Input reached EOF");
            break;
        };

        event_tx.send(parse_line(&line)).await?;
    }

    Ok(())
}

/// Print outgoing events until the app side closes.
///
/// The last annotation is kept so a note toggle on one of its words
/// reprints the passage with the new highlighting.
pub async fn output_loop(
    app_rx: AsyncReceiver<AppEvent>,
    config: AnnotateConfig,
    json: bool,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut shown: Option<Annotation> = None;
    let mut noted: HashSet<String> = HashSet::new();

    loop {
        let event = tokio::select! {
            event = app_rx.recv() => event,
            _ = cancel.cancelled() => break,
        };
        let Ok(event) = event else {
            break;
        };

        let text = match event {
            AppEvent::ShowAnnotation {
                request_id,
                annotation,
                noted: snapshot,
            } => {
                tracing::debug!("Showing result of request {}", request_id);
                noted = snapshot;
                let text = if json {
                    render_json(&annotation)?
                } else {
                    render_annotation(&annotation, &config, &noted)
                };
                shown = Some(annotation);
                text
            }
            AppEvent::NoteToggled { word, noted: is_noted } => {
                let mut text = if is_noted {
                    noted.insert(word.clone());
                    format!("Added {word} to notes")
                } else {
                    noted.remove(&word);
                    format!("Removed {word} from notes")
                };
                if let Some(annotation) = shown.as_ref().filter(|a| !json && contains_word(a, &word)) {
                    text.push('\n');
                    text.push_str(&render_passage(annotation, config.display_mode, &noted));
                }
                text
            }
            AppEvent::Status(message) => message,
            AppEvent::TextInput(_) | AppEvent::ToggleNote(_) => continue,
        };

        {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text.trim_end())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn contains_word(annotation: &Annotation, word: &str) -> bool {
    annotation.words().any(|w| w.text == word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert!(matches!(parse_line("你好"), AppEvent::TextInput(t) if t == "你好"));
        assert!(matches!(parse_line("/note 学习 "), AppEvent::ToggleNote(w) if w == "学习"));
        assert!(matches!(parse_line(" /note x"), AppEvent::TextInput(_)));
    }
}
