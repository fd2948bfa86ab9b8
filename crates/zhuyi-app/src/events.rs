use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;
use crate::types::AppEvent;

pub mod annotate;
pub mod notes;
pub mod wordlist;

use annotate::handle_text_input;
use notes::handle_toggle_note;

/// App's main loop.
///
/// Annotation requests run concurrently, each tagged with a fresh request id.
/// When the input side closes, in-flight requests are drained before returning.
pub async fn event_loop(
    state: Arc<AppState>,
    input_rx: AsyncReceiver<AppEvent>,
    app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut in_flight = JoinSet::new();

    tracing::info!("Event loop started");
    loop {
        let event = tokio::select! {
            event = input_rx.recv() => event,
            _ = cancel.cancelled() => {
                tracing::info!("Event loop cancelled");
                in_flight.abort_all();
                return Ok(());
            }
        };

        let Ok(event) = event else {
            tracing::debug!("Input closed, draining {} requests", in_flight.len());
            break;
        };

        match event {
            AppEvent::TextInput(text) => {
                let request_id = state.next_request();
                in_flight.spawn(handle_text_input(
                    state.clone(),
                    request_id,
                    text,
                    app_tx.clone(),
                ));
            }
            AppEvent::ToggleNote(word) => {
                if let Err(e) = handle_toggle_note(&state, &word, &app_tx).await {
                    tracing::error!("Failed to toggle note {}: {}", word, e);
                    app_tx
                        .send(AppEvent::Status(format!("Failed to update notes: {e}")))
                        .await?;
                }
            }
            other => {
                tracing::debug!("Ignoring outgoing event on input: {:?}", other);
            }
        }

        while let Some(result) = in_flight.try_join_next() {
            log_request_result(result);
        }
    }

    while let Some(result) = in_flight.join_next().await {
        log_request_result(result);
    }

    Ok(())
}

fn log_request_result(result: Result<anyhow::Result<()>, tokio::task::JoinError>) {
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!("Annotation request failed: {:#}", e),
        Err(e) => tracing::error!("Annotation task panicked: {}", e),
    }
}
