use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Mutex, RwLock};
use zhuyi_config::{AnnotateConfig, Config};
use zhuyi_core::{LoadError, NotedWords};
use zhuyi_lang_chinese::{ChineseProcessor, DataLoader};

use crate::store::JsonFileStore;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub loader: DataLoader,
    pub notes: Mutex<NotedWords<JsonFileStore>>,
    /// Id of the most recent annotation request
    latest_request: AtomicU64,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let loader = DataLoader::new(config.datasets.clone());
        let notes = NotedWords::load(JsonFileStore::new(config.notes.path.clone()));
        tracing::debug!("Loaded {} noted words", notes.len());

        Self {
            config: Arc::new(RwLock::new(config)),
            loader,
            notes: Mutex::new(notes),
            latest_request: AtomicU64::new(0),
        }
    }

    /// Processor over the shared datasets, loading them on first use
    pub async fn processor(&self) -> Result<ChineseProcessor, LoadError> {
        let data = self.loader.load().await?;
        Ok(ChineseProcessor::new(data))
    }

    /// Snapshot of the noted words for highlighting
    pub async fn noted_words(&self) -> HashSet<String> {
        self.notes.lock().await.words().iter().cloned().collect()
    }

    pub async fn annotate_config(&self) -> AnnotateConfig {
        self.config.read().await.annotate.clone()
    }

    /// Claim the next request id, superseding every earlier one
    pub fn next_request(&self) -> u64 {
        self.latest_request.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, request_id: u64) -> bool {
        self.latest_request.load(Ordering::SeqCst) == request_id
    }
}
