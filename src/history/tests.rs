//! Tests for history persistence

use super::*;
use crate::error::Error;
use crate::templates::TemplateKey;
use tempfile::TempDir;

fn entry(prompt: &str, timestamp: &str) -> HistoryEntry {
    HistoryEntry {
        user_prompt: prompt.to_string(),
        model: Some("phi4-mini".to_string()),
        prompt_style: "realistic".to_string(),
        model_response: format!("response to {prompt}"),
        timestamp: timestamp.to_string(),
    }
}

fn store_in(temp_dir: &TempDir) -> HistoryStore {
    HistoryStore::new(temp_dir.path().join(DEFAULT_HISTORY_FILE))
}

#[tokio::test]
async fn test_list_without_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    assert!(store.list().await.unwrap().is_empty());
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_list_empty_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    std::fs::write(store.path(), "  \n").unwrap();

    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_corrupt_file_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    std::fs::write(store.path(), "[{not json").unwrap();

    let err = store.list().await.unwrap_err();
    assert!(matches!(err, Error::StorageParse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_list_directory_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = HistoryStore::new(temp_dir.path());

    let err = store.list().await.unwrap_err();
    assert!(matches!(err, Error::StorageRead(_)), "got {err:?}");
}

#[tokio::test]
async fn test_append_then_list_preserves_order() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    let first = entry("fox", "2024-01-01T00:00:00.000Z");
    let second = entry("owl", "2024-01-01T00:00:01.000Z");
    store.append(first.clone()).await.unwrap();
    store.append(second.clone()).await.unwrap();

    assert_eq!(store.list().await.unwrap(), vec![first, second]);
}

#[tokio::test]
async fn test_saved_file_is_pretty_json_array() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    store
        .append(entry("fox", "2024-01-01T00:00:00.000Z"))
        .await
        .unwrap();

    let content = std::fs::read_to_string(store.path()).unwrap();
    assert!(content.starts_with("[\n"));
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value[0]["user_prompt"], "fox");
    assert!(!temp_dir.path().join("prompt-history.json.tmp").exists());
}

#[tokio::test]
async fn test_append_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let store = HistoryStore::new(temp_dir.path().join("data").join("history.json"));

    store
        .append(entry("fox", "2024-01-01T00:00:00.000Z"))
        .await
        .unwrap();
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_append_backs_up_corrupt_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    std::fs::write(store.path(), "{oops").unwrap();

    let fresh = entry("fox", "2024-01-01T00:00:00.000Z");
    store.append(fresh.clone()).await.unwrap();

    assert_eq!(store.list().await.unwrap(), vec![fresh]);

    let backups: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_name()
                .to_string_lossy()
                .starts_with("prompt-history.json.corrupted.")
        })
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(std::fs::read_to_string(backups[0].path()).unwrap(), "{oops");
}

#[tokio::test]
async fn test_remove_matching_timestamp() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    let keep = entry("owl", "2024-01-01T00:00:01.000Z");
    store
        .append(entry("fox", "2024-01-01T00:00:00.000Z"))
        .await
        .unwrap();
    store.append(keep.clone()).await.unwrap();

    let removed = store.remove("2024-01-01T00:00:00.000Z").await.unwrap();

    assert_eq!(removed, 1);
    assert_eq!(store.list().await.unwrap(), vec![keep]);
}

#[tokio::test]
async fn test_remove_unknown_timestamp_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    store
        .append(entry("fox", "2024-01-01T00:00:00.000Z"))
        .await
        .unwrap();
    let before = std::fs::read_to_string(store.path()).unwrap();

    let removed = store.remove("1999-12-31T23:59:59.999Z").await.unwrap();

    assert_eq!(removed, 0);
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
}

#[tokio::test]
async fn test_remove_without_file_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    assert_eq!(store.remove("2024-01-01T00:00:00.000Z").await.unwrap(), 0);
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_remove_drops_every_colliding_entry() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    let ts = "2024-01-01T00:00:00.000Z";
    store.append(entry("fox", ts)).await.unwrap();
    store.append(entry("owl", ts)).await.unwrap();

    assert_eq!(store.remove(ts).await.unwrap(), 2);
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_remove_on_corrupt_file_leaves_it_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    std::fs::write(store.path(), "not json").unwrap();

    let err = store.remove("2024-01-01T00:00:00.000Z").await.unwrap_err();
    assert!(matches!(err, Error::StorageParse(_)));
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "not json");
}

#[tokio::test]
async fn test_existing_log_from_disk_is_readable() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    std::fs::write(
        store.path(),
        r#"[
  {
    "user_prompt": "chat noir",
    "prompt_style": "drawing",
    "model_response": "A black cat in ink.",
    "timestamp": "2024-05-02T10:11:12.345Z"
  }
]"#,
    )
    .unwrap();

    let history = store.list().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].model, None);
    assert_eq!(history[0].prompt_style, "drawing");
}

#[tokio::test]
async fn test_queue_serializes_concurrent_appends() {
    let temp_dir = TempDir::new().unwrap();
    let queue = HistoryQueue::new(store_in(&temp_dir));

    let mut handles = Vec::new();
    for i in 0..25 {
        let queue = queue.clone();
        handles.push(tokio::spawn(async move {
            queue
                .append(entry(&format!("theme {i}"), &format!("ts-{i:03}")))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(queue.list().await.unwrap().len(), 25);
}

#[tokio::test]
async fn test_queue_list_observes_prior_submit() {
    let temp_dir = TempDir::new().unwrap();
    let queue = HistoryQueue::new(store_in(&temp_dir));

    let submitted = HistoryEntry::new("fox", None, TemplateKey::Music, "fox, snow, ambient");
    queue.submit_append(submitted.clone());

    assert_eq!(queue.list().await.unwrap(), vec![submitted]);
}

#[tokio::test]
async fn test_queue_remove_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let queue = HistoryQueue::new(store_in(&temp_dir));
    let e = entry("fox", "2024-01-01T00:00:00.000Z");

    queue.append(e.clone()).await.unwrap();
    assert!(queue.list().await.unwrap().contains(&e));

    assert_eq!(queue.remove(&e.timestamp).await.unwrap(), 1);
    assert!(!queue.list().await.unwrap().contains(&e));
}

#[tokio::test]
async fn test_queue_reports_write_failures() {
    let temp_dir = TempDir::new().unwrap();
    // The log path is an existing directory, so reads fail before any write.
    let queue = HistoryQueue::new(HistoryStore::new(temp_dir.path()));

    let err = queue
        .append(entry("fox", "2024-01-01T00:00:00.000Z"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::StorageRead(_)), "got {err:?}");

    // The worker keeps serving after a failure.
    assert!(queue.list().await.is_err());
}

#[tokio::test]
async fn test_queue_shutdown_drains_pending_appends() {
    let temp_dir = TempDir::new().unwrap();
    let queue = HistoryQueue::new(store_in(&temp_dir));
    let other_handle = queue.clone();

    for i in 0..5 {
        queue.submit_append(entry(&format!("theme {i}"), &format!("ts-{i}")));
    }
    queue.shutdown().await.unwrap();

    let history = store_in(&temp_dir).list().await.unwrap();
    assert_eq!(history.len(), 5);
    assert_eq!(history[4].timestamp, "ts-4");

    // Every clone sees the stopped worker.
    let err = other_handle.list().await.unwrap_err();
    assert!(matches!(err, Error::StorageRead(_)), "got {err:?}");
}

#[test]
fn test_shutdown_before_runtime_drop_keeps_last_entry() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(DEFAULT_HISTORY_FILE);

    let runtime = tokio::runtime::Runtime::new().unwrap();
    runtime.block_on(async {
        let queue = HistoryQueue::new(HistoryStore::new(path.clone()));
        queue.submit_append(entry("last fox", "2024-01-01T00:00:00.000Z"));
        queue.shutdown().await.unwrap();
    });
    drop(runtime);

    let written: Vec<HistoryEntry> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].user_prompt, "last fox");
    assert!(!temp_dir
        .path()
        .join(format!("{DEFAULT_HISTORY_FILE}.tmp"))
        .exists());
}
