use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::datasets::DatasetConfig;
use self::notes::NotesConfig;

pub mod annotate;
pub mod datasets;
pub mod notes;

pub use annotate::{
    AnnotateConfig, DisplayMode, HskFilter, PhoneticSystem, SortOrder, TranslationLanguage,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {kind}: {value}")]
    InvalidValue { kind: &'static str, value: String },

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn invalid(kind: &'static str, value: &str) -> Self {
        ConfigError::InvalidValue {
            kind,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub annotate: AnnotateConfig,
    pub datasets: DatasetConfig,
    pub notes: NotesConfig,
}

impl Config {
    /// Load a JSON config file if it exists, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            tracing::info!("Loading config from {}", path.display());
            let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&data)?
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Config::default()
        };

        config.apply_env();
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply `ZHUYI_*` overrides from any key lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("ZHUYI_DATA_DIR") {
            self.datasets.data_dir = PathBuf::from(dir);
        }

        if let Some(url) = lookup("ZHUYI_HSK_URL") {
            self.datasets.hsk = url;
        }

        if let Some(path) = lookup("ZHUYI_NOTES_PATH") {
            self.notes.path = PathBuf::from(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.json")).unwrap();

        assert_eq!(config.datasets.multi_en, "cedict_full.json");
        assert_eq!(config.annotate.hsk_filter, HskFilter::AtLeast(1));
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"annotate":{"insert_spaces":true,"sort_order":"pronunciation"},"datasets":{"hsk":"hsk.json"}}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.annotate.insert_spaces);
        assert_eq!(config.annotate.sort_order, SortOrder::Pronunciation);
        assert_eq!(config.datasets.hsk, "hsk.json");
        assert_eq!(config.datasets.single_vn, "cvdict_chars.json");
    }

    #[test]
    fn test_load_rejects_bad_enum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"annotate":{"sort_order":"random"}}"#).unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ZHUYI_DATA_DIR", "/data"),
            ("ZHUYI_NOTES_PATH", "/tmp/notes.json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.datasets.data_dir, PathBuf::from("/data"));
        assert_eq!(config.notes.path, PathBuf::from("/tmp/notes.json"));
        assert_eq!(config.datasets.hsk, datasets::DEFAULT_HSK_URL);
    }
}
