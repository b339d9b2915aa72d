use super::*;
use tempfile::TempDir;

fn sample_document() -> Document {
    Document {
        lists: vec![GroceryList {
            id: 1,
            name: "Weekly".to_string(),
            items: vec![Item {
                id: 1,
                name: "milk".to_string(),
                checked: false,
                position: 0,
            }],
        }],
    }
}

#[tokio::test]
async fn test_load_initializes_default_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("grocery-lists.json");
    let store = JsonFileStore::new(&path);

    let doc = store.load().await.unwrap();

    assert_eq!(doc.lists.len(), 1);
    assert_eq!(doc.lists[0].id, 1);
    assert_eq!(doc.lists[0].name, DEFAULT_LIST_NAME);
    assert!(doc.lists[0].items.is_empty());
    assert!(path.exists(), "default document should be persisted");
}

#[tokio::test]
async fn test_default_document_is_durable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("grocery-lists.json");

    let first = JsonFileStore::new(&path).load().await.unwrap();
    let second = JsonFileStore::new(&path).load().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_save_then_load_returns_saved_document() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("grocery-lists.json"));

    store.save(&sample_document()).await.unwrap();

    assert_eq!(store.load().await.unwrap(), sample_document());
}

#[tokio::test]
async fn test_save_writes_pretty_json_layout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("grocery-lists.json");
    let store = JsonFileStore::new(&path);

    store.save(&sample_document()).await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("{\n  \"lists\": ["));
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["lists"][0]["items"][0]["name"], "milk");
    assert_eq!(parsed["lists"][0]["items"][0]["checked"], false);
    assert_eq!(parsed["lists"][0]["items"][0]["position"], 0);
}

#[tokio::test]
async fn test_load_invalid_json_is_corrupt() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("grocery-lists.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = JsonFileStore::new(&path).load().await;

    assert!(matches!(result, Err(StoreError::CorruptStore { .. })));
}

#[tokio::test]
async fn test_load_missing_lists_is_corrupt() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("grocery-lists.json");
    std::fs::write(&path, "{}").unwrap();

    let result = JsonFileStore::new(&path).load().await;

    assert!(matches!(result, Err(StoreError::CorruptStore { .. })));
    // The corrupt file is left as it was
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
}

#[tokio::test]
async fn test_load_wrong_field_type_is_corrupt() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("grocery-lists.json");
    std::fs::write(&path, r#"{"lists": [{"id": "one", "name": "x", "items": []}]}"#).unwrap();

    let result = JsonFileStore::new(&path).load().await;

    assert!(matches!(result, Err(StoreError::CorruptStore { .. })));
}

#[tokio::test]
async fn test_load_rereads_medium_every_time() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("grocery-lists.json");
    let store = JsonFileStore::new(&path);
    store.load().await.unwrap();

    std::fs::write(&path, r#"{"lists": []}"#).unwrap();

    assert!(store.load().await.unwrap().lists.is_empty());
}

#[tokio::test]
async fn test_load_directory_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path());

    let result = store.load().await;

    assert!(matches!(result, Err(StoreError::IoError(_))));
}

#[tokio::test]
async fn test_memory_store_lazy_default_counts_as_save() {
    let store = MemoryStore::new();

    let doc = store.load().await.unwrap();
    assert_eq!(doc, Document::with_default_list());
    assert_eq!(store.save_count(), 1);

    store.load().await.unwrap();
    assert_eq!(store.save_count(), 1);
}

#[tokio::test]
async fn test_memory_store_with_document_skips_initialization() {
    let store = MemoryStore::with_document(sample_document());

    assert_eq!(store.load().await.unwrap(), sample_document());
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn test_memory_store_hands_out_copies() {
    let store = MemoryStore::new();
    let mut doc = store.load().await.unwrap();
    doc.lists.clear();

    assert_eq!(store.load().await.unwrap().lists.len(), 1);
}
