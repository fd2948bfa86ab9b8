use std::sync::Arc;

use kanal::AsyncSender;
use zhuyi_lang_chinese::Annotation;

use crate::render::EMPTY_INPUT;
use crate::state::AppState;
use crate::types::AppEvent;

/// Annotate `text` with the current options, `None` for blank input
pub async fn annotate_text(state: &AppState, text: &str) -> anyhow::Result<Option<Annotation>> {
    let processor = state.processor().await?;
    let config = state.annotate_config().await;
    let text = text.to_string();

    let annotation = tokio::task::spawn_blocking(move || processor.annotate(&text, &config)).await?;
    Ok(annotation)
}

/// Annotate one request and publish the result if nothing newer arrived
pub async fn handle_text_input(
    state: Arc<AppState>,
    request_id: u64,
    text: String,
    app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!("Request {}: {} chars", request_id, text.chars().count());

    let result = annotate_text(&state, &text).await;

    if !state.is_latest(request_id) {
        tracing::warn!("Discarding stale result for request {}", request_id);
        return Ok(());
    }

    let event = match result {
        Ok(Some(annotation)) => AppEvent::ShowAnnotation {
            request_id,
            annotation,
            noted: state.noted_words().await,
        },
        Ok(None) => AppEvent::Status(EMPTY_INPUT.to_string()),
        Err(e) => {
            tracing::error!("Request {} failed: {:#}", request_id, e);
            AppEvent::Status(format!("Failed to load dictionary data: {e:#}"))
        }
    };

    app_tx.send(event).await?;
    Ok(())
}
