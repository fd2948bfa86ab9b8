#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("Network error fetching {location}: {message}")]
    Network { location: String, message: String },

    #[error("Failed to parse {dataset}: {source}")]
    Parse {
        dataset: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid stored value: {0}")]
    Serde(#[from] serde_json::Error),
}
