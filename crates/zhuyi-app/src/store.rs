use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::{Map, Value};
use zhuyi_core::{KeyValueStore, StoreError};

/// Key-value store backed by a single JSON object on disk.
///
/// Values are kept as JSON, so a stored list shows up as a list in the file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<Map<String, Value>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(Map::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.read_all()?;
        Ok(values.get(key).map(Value::to_string))
    }

    /// A corrupt file is replaced rather than blocking every later write
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = match self.read_all() {
            Err(StoreError::Serde(e)) => {
                tracing::warn!("Overwriting corrupt store {}: {}", self.path.display(), e);
                Map::new()
            }
            other => other?,
        };
        let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
        values.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        tracing::debug!("Saved {} to {}", key, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use zhuyi_core::NotedWords;

    use super::*;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("notes.json"));

        assert_eq!(store.get("notedWords").unwrap(), None);
    }

    #[test]
    fn test_values_stay_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("notes.json");
        let mut store = JsonFileStore::new(&path);

        store.set("notedWords", r#"["你好","学习"]"#).unwrap();
        store.set("other", "plain text").unwrap();

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["notedWords"], serde_json::json!(["你好", "学习"]));
        assert_eq!(raw["other"], "plain text");
        assert_eq!(store.get("notedWords").unwrap().unwrap(), r#"["你好","学习"]"#);
    }

    #[test]
    fn test_noted_words_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let mut notes = NotedWords::load(JsonFileStore::new(&path));
        notes.add("中文").unwrap();
        notes.toggle("汉语").unwrap();

        let reloaded = NotedWords::load(JsonFileStore::new(&path));
        assert_eq!(reloaded.words(), ["中文".to_string(), "汉语".to_string()]);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, "{oops").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("notedWords"), Err(StoreError::Serde(_))));
        assert!(NotedWords::load(store).is_empty());
    }

    #[test]
    fn test_corrupt_file_is_overwritten_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, "{oops").unwrap();

        let mut notes = NotedWords::load(JsonFileStore::new(&path));
        assert!(notes.add("中文").unwrap());
        assert_eq!(notes.words(), ["中文".to_string()]);

        let reloaded = NotedWords::load(JsonFileStore::new(&path));
        assert_eq!(reloaded.words(), ["中文".to_string()]);
    }

    #[test]
    fn test_failed_write_leaves_words_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        // a directory where the file should be cannot be read or written
        std::fs::create_dir(&path).unwrap();

        let mut notes = NotedWords::load(JsonFileStore::new(&path));
        assert!(notes.add("中文").is_err());
        assert!(notes.is_empty());
        assert!(!notes.contains("中文"));
    }
}
