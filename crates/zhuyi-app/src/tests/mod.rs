use std::path::Path;
use std::sync::Arc;

use zhuyi_config::Config;
use zhuyi_config::datasets::DatasetConfig;
use zhuyi_config::notes::NotesConfig;

use crate::state::AppState;

mod cli_tests;
mod notes_tests;

const DATASETS: [(&str, &str); 5] = [
    (
        "cedict_full.json",
        r#"{
            "你好": {"pinyin": "ni3 hao3", "definition": "hello"},
            "学习": {"pinyin": "xue2 xi2", "definition": "to learn"},
            "中文": {"pinyin": "Zhong1 wen2", "definition": "Chinese language"},
            "汉语": {"pinyin": "Han4 yu3", "definition": "Chinese language"}
        }"#,
    ),
    (
        "cedict_chars.json",
        r#"{"好": {"pinyin": "hao3", "definition": "good"}, "很": {"pinyin": "hen3", "definition": "very"}}"#,
    ),
    (
        "cvdict_full.json",
        r#"{"你好": {"pinyin": "ni3 hao3", "definition": "xin chào"}}"#,
    ),
    ("cvdict_chars.json", "{}"),
    (
        "hsk.json",
        r#"[
            {"simplified": "你好", "level": ["new-1"]},
            {"simplified": "学习", "level": ["new-1"]},
            {"simplified": "很", "level": ["new-1"]},
            {"simplified": "中文", "level": ["new-2"]},
            {"simplified": "汉语", "level": ["old-2"]}
        ]"#,
    ),
];

/// App state over small datasets written to `dir`
fn fixture_state(dir: &Path) -> Arc<AppState> {
    for (name, body) in DATASETS {
        std::fs::write(dir.join(name), body).unwrap();
    }

    let config = Config {
        datasets: DatasetConfig {
            data_dir: dir.to_path_buf(),
            hsk: "hsk.json".to_string(),
            ..DatasetConfig::default()
        },
        notes: NotesConfig {
            path: dir.join("notes.json"),
        },
        ..Config::default()
    };

    Arc::new(AppState::new(config))
}

/// App state whose datasets do not exist
fn missing_data_state(dir: &Path) -> Arc<AppState> {
    let config = Config {
        datasets: DatasetConfig {
            data_dir: dir.join("nowhere"),
            hsk: "hsk.json".to_string(),
            ..DatasetConfig::default()
        },
        notes: NotesConfig {
            path: dir.join("notes.json"),
        },
        ..Config::default()
    };

    Arc::new(AppState::new(config))
}
