use std::io::ErrorKind;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use zhuyi_config::datasets::{DatasetConfig, is_url};
use zhuyi_core::LoadError;

use crate::dictionary::{DictTable, DictionaryBundle};
use crate::hsk::HskMap;

/// Where raw dataset text comes from
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<String, LoadError>;
}

/// Local files, or HTTP for `http(s)://` locations
#[derive(Clone, Default)]
pub struct DefaultSource {
    client: reqwest::Client,
}

impl DefaultSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_url(&self, url: &str) -> Result<String, LoadError> {
        let network = |e: reqwest::Error| LoadError::Network {
            location: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(network)?;

        if response.status() == 404 {
            return Err(LoadError::NotFound(url.to_string()));
        }

        if !response.status().is_success() {
            return Err(LoadError::Network {
                location: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        response.text().await.map_err(network)
    }
}

#[async_trait]
impl DatasetSource for DefaultSource {
    async fn fetch(&self, location: &str) -> Result<String, LoadError> {
        if is_url(location) {
            return self.fetch_url(location).await;
        }

        tokio::fs::read_to_string(location)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => LoadError::NotFound(location.to_string()),
                _ => LoadError::Io(e),
            })
    }
}

/// Everything annotation needs, immutable after loading
#[derive(Debug, Default)]
pub struct ChineseData {
    pub dictionaries: DictionaryBundle,
    pub hsk: HskMap,
}

/// Loads the five datasets once and hands out the shared result.
///
/// A failed load leaves nothing cached, the next `load` starts over.
pub struct DataLoader<S = DefaultSource> {
    source: S,
    config: DatasetConfig,
    data: OnceCell<Arc<ChineseData>>,
}

impl DataLoader<DefaultSource> {
    pub fn new(config: DatasetConfig) -> Self {
        Self::with_source(DefaultSource::new(), config)
    }
}

impl<S: DatasetSource> DataLoader<S> {
    pub fn with_source(source: S, config: DatasetConfig) -> Self {
        Self {
            source,
            config,
            data: OnceCell::new(),
        }
    }

    pub async fn load(&self) -> Result<Arc<ChineseData>, LoadError> {
        self.data
            .get_or_try_init(|| async {
                match self.fetch_all().await {
                    Ok(data) => Ok(Arc::new(data)),
                    Err(e) => {
                        tracing::error!("Failed to load Chinese datasets: {}", e);
                        Err(e)
                    }
                }
            })
            .await
            .cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.data.initialized()
    }

    /// Loaded data, without triggering a load
    pub fn get(&self) -> Option<Arc<ChineseData>> {
        self.data.get().cloned()
    }

    async fn fetch_all(&self) -> Result<ChineseData, LoadError> {
        let config = &self.config;
        tracing::info!("Loading Chinese datasets from {}", config.data_dir.display());

        let (multi_en, single_en, multi_vn, single_vn, hsk) = tokio::try_join!(
            self.fetch_table("multi_en", &config.multi_en),
            self.fetch_table("single_en", &config.single_en),
            self.fetch_table("multi_vn", &config.multi_vn),
            self.fetch_table("single_vn", &config.single_vn),
            self.fetch_hsk(&config.hsk),
        )?;

        let dictionaries = DictionaryBundle::new(multi_en, single_en, multi_vn, single_vn);
        for meta in dictionaries.metadata() {
            tracing::info!(
                "Loaded {} ({}): {} entries",
                meta.name,
                meta.language,
                meta.entry_count
            );
        }
        tracing::info!("Loaded {} HSK words", hsk.len());

        Ok(ChineseData { dictionaries, hsk })
    }

    async fn fetch_table(&self, name: &str, location: &str) -> Result<DictTable, LoadError> {
        let location = self.config.resolve(location);
        tracing::debug!("Fetching {} from {}", name, location);
        let json = self.source.fetch(&location).await?;
        DictTable::from_json(name, &json)
    }

    async fn fetch_hsk(&self, location: &str) -> Result<HskMap, LoadError> {
        let location = self.config.resolve(location);
        tracing::debug!("Fetching hsk from {}", location);
        let json = self.source.fetch(&location).await?;
        HskMap::from_json(&json)
    }
}
