use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_HSK_URL: &str =
    "https://raw.githubusercontent.com/drkameleon/complete-hsk-vocabulary/main/complete.json";

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_multi_en() -> String {
    "cedict_full.json".to_string()
}

fn default_single_en() -> String {
    "cedict_chars.json".to_string()
}

fn default_multi_vn() -> String {
    "cvdict_full.json".to_string()
}

fn default_single_vn() -> String {
    "cvdict_chars.json".to_string()
}

fn default_hsk() -> String {
    DEFAULT_HSK_URL.to_string()
}

/// Where each dataset is fetched from: a file path or an `http(s)://` URL
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DatasetConfig {
    /// Base directory for relative file locations
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_multi_en")]
    pub multi_en: String,
    #[serde(default = "default_single_en")]
    pub single_en: String,
    #[serde(default = "default_multi_vn")]
    pub multi_vn: String,
    #[serde(default = "default_single_vn")]
    pub single_vn: String,
    #[serde(default = "default_hsk")]
    pub hsk: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            multi_en: default_multi_en(),
            single_en: default_single_en(),
            multi_vn: default_multi_vn(),
            single_vn: default_single_vn(),
            hsk: default_hsk(),
        }
    }
}

impl DatasetConfig {
    /// Resolve a dataset location against `data_dir`, URLs are returned as is
    pub fn resolve(&self, location: &str) -> String {
        if is_url(location) || Path::new(location).is_absolute() {
            location.to_string()
        } else {
            self.data_dir.join(location).to_string_lossy().into_owned()
        }
    }
}

pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}
