use std::time::Duration;

use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use zhuyi_config::TranslationLanguage;

use super::{fixture_state, missing_data_state};
use crate::controller::ChannelSet;
use crate::events::event_loop;
use crate::events::notes::note_lines;
use crate::state::AppState;
use crate::types::AppEvent;

#[tokio::test]
async fn test_note_lines_resolve_definitions() {
    let dir = tempfile::tempdir().unwrap();
    let state = fixture_state(dir.path());
    {
        let mut notes = state.notes.lock().await;
        notes.add("你好").unwrap();
        notes.add("龘").unwrap();
    }

    let lines = note_lines(&state).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].word, "你好");
    assert_eq!(lines[0].pinyin, "nǐ hǎo");
    assert_eq!(lines[0].definition, "hello | xin chào");
    assert!(state.notes.lock().await.contains("龘"));

    state.config.write().await.annotate.translation = TranslationLanguage::VietnameseOnly;
    let lines = note_lines(&state).await.unwrap();
    assert_eq!(lines[0].definition, "xin chào");
}

#[tokio::test]
async fn test_empty_notes_need_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let state = missing_data_state(dir.path());

    assert!(note_lines(&state).await.unwrap().is_empty());
    assert!(!state.loader.is_loaded());
}

#[tokio::test]
async fn test_toggle_through_event_loop_persists() {
    let dir = tempfile::tempdir().unwrap();
    let state = fixture_state(dir.path());
    let ChannelSet {
        input_to_app: (input_tx, input_rx),
        app_to_output: (app_tx, app_rx),
    } = ChannelSet::new();

    let handle = tokio::spawn(event_loop(
        state.clone(),
        input_rx,
        app_tx,
        CancellationToken::new(),
    ));

    input_tx.send(AppEvent::ToggleNote("学习".to_string())).await.unwrap();
    input_tx.send(AppEvent::ToggleNote("中文".to_string())).await.unwrap();
    input_tx.send(AppEvent::ToggleNote("学习".to_string())).await.unwrap();
    drop(input_tx);

    let mut toggles = Vec::new();
    while let Ok(Ok(AppEvent::NoteToggled { word, noted })) =
        timeout(Duration::from_secs(5), app_rx.recv()).await
    {
        toggles.push((word, noted));
    }
    assert_eq!(
        toggles,
        vec![
            ("学习".to_string(), true),
            ("中文".to_string(), true),
            ("学习".to_string(), false),
        ]
    );
    handle.await.unwrap().unwrap();

    let reloaded = AppState::new(state.config.read().await.clone());
    assert_eq!(reloaded.notes.lock().await.words(), ["中文".to_string()]);
}

#[tokio::test]
async fn test_failed_toggle_keeps_loop_running() {
    let dir = tempfile::tempdir().unwrap();
    // a directory in place of the notes file makes every save fail
    std::fs::create_dir(dir.path().join("notes.json")).unwrap();
    let state = fixture_state(dir.path());
    let ChannelSet {
        input_to_app: (input_tx, input_rx),
        app_to_output: (app_tx, app_rx),
    } = ChannelSet::new();

    let handle = tokio::spawn(event_loop(
        state.clone(),
        input_rx,
        app_tx,
        CancellationToken::new(),
    ));

    input_tx.send(AppEvent::ToggleNote("学习".to_string())).await.unwrap();
    let event = timeout(Duration::from_secs(5), app_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(event, AppEvent::Status(ref m) if m.starts_with("Failed to update notes")));
    assert!(!state.notes.lock().await.contains("学习"));

    input_tx.send(AppEvent::TextInput("学习".to_string())).await.unwrap();
    let event = timeout(Duration::from_secs(5), app_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(event, AppEvent::ShowAnnotation { .. }));

    drop(input_tx);
    handle.await.unwrap().unwrap();
}
