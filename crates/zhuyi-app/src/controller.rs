use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::AsyncBufRead;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use zhuyi_config::AnnotateConfig;

use crate::events::event_loop;
use crate::io::{output_loop, watcher_io};
use crate::state::AppState;
use crate::types::AppEvent;

/// Centralized channel management
pub struct ChannelSet {
    pub input_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub app_to_output: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            input_to_app: kanal::bounded_async(64),
            app_to_output: kanal::bounded_async(256),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Spawn watcher, event loop and output.
    ///
    /// Each sender lives in exactly one task, so EOF on `reader` winds the
    /// whole chain down once pending results are printed.
    pub fn spawn_tasks<R>(
        &self,
        reader: R,
        config: AnnotateConfig,
        json: bool,
    ) -> JoinSet<anyhow::Result<()>>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        let ChannelSet {
            input_to_app: (input_tx, input_rx),
            app_to_output: (app_tx, app_rx),
        } = ChannelSet::new();

        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            input_rx,
            app_tx,
            self.cancel_token.child_token(),
        ));

        // Output
        tasks.spawn(output_loop(
            app_rx,
            config,
            json,
            self.cancel_token.child_token(),
        ));

        // Watcher IO
        tasks.spawn(watcher_io(
            reader,
            self.cancel_token.child_token(),
            input_tx,
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
