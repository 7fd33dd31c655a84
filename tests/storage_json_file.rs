use chrono::Utc;
use snaplink::domain::client_metadata::ClientMetadata;
use snaplink::domain::entities::{ClickEvent, LinkRecord};
use snaplink::domain::registry::Registry;
use snaplink::domain::repositories::RegistryStorage;
use snaplink::domain::user_agent::DeviceInfo;
use snaplink::error::AppError;
use snaplink::infrastructure::persistence::JsonFileStorage;
use tempfile::TempDir;

fn registry_with(ids: &[&str]) -> Registry {
    let mut registry = Registry::new();
    for id in ids {
        let mut record = LinkRecord::new(
            id.to_string(),
            format!("https://{id}.example.com"),
            Utc::now(),
        );
        record.record_click(ClickEvent::capture(
            ClientMetadata::new(Some("10.0.0.1".to_string()), Some("curl/8.0"), None),
            DeviceInfo::default(),
            Utc::now(),
        ));
        registry.insert(record).unwrap();
    }
    registry
}

#[tokio::test]
async fn test_missing_file_loads_empty_registry() {
    let dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("urls.json"));

    let registry = storage.load().await.unwrap();

    assert!(registry.is_empty());
}

#[tokio::test]
async fn test_save_then_load_preserves_order_and_clicks() {
    let dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("urls.json"));
    let registry = registry_with(&["zeta", "alpha", "mid"]);

    storage.save(&registry).await.unwrap();
    let loaded = storage.load().await.unwrap();

    assert_eq!(loaded, registry);
    let ids: Vec<&str> = loaded.iter().map(|r| r.short_id.as_str()).collect();
    assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
}

#[tokio::test]
async fn test_save_creates_parent_directory_and_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("data").join("urls.json");
    let storage = JsonFileStorage::new(&path);

    storage.save(&registry_with(&["abc"])).await.unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("tmp").exists());
}

#[tokio::test]
async fn test_document_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("urls.json");
    let storage = JsonFileStorage::new(&path);

    storage.save(&registry_with(&["abc"])).await.unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let record = &raw["abc"];
    assert_eq!(record["originalUrl"], "https://abc.example.com");
    assert_eq!(record["clickCount"], 1);
    assert!(record["createdAt"].is_string());
    assert_eq!(record["clickLog"][0]["sourceAddress"], "10.0.0.1");
    assert_eq!(record["clickLog"][0]["userAgentRaw"], "curl/8.0");
    assert_eq!(record["clickLog"][0]["referer"], "direct");
    assert!(record.get("shortId").is_none());
}

#[tokio::test]
async fn test_corrupt_document_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("urls.json");
    std::fs::write(&path, "{ not json").unwrap();
    let storage = JsonFileStorage::new(&path);

    let result = storage.load().await;

    assert!(matches!(result.unwrap_err(), AppError::Storage { .. }));
}

#[tokio::test]
async fn test_inconsistent_click_count_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("urls.json");
    std::fs::write(
        &path,
        r#"{
          "abc": {
            "originalUrl": "https://example.com",
            "createdAt": "2024-01-01T10:00:00Z",
            "clickCount": 2,
            "clickLog": []
          }
        }"#,
    )
    .unwrap();
    let storage = JsonFileStorage::new(&path);

    let err = storage.load().await.unwrap_err();

    assert!(matches!(err, AppError::Storage { .. }));
    assert_eq!(err.code(), "storage_error");
}

#[tokio::test]
async fn test_save_overwrites_previous_document() {
    let dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("urls.json"));

    storage.save(&registry_with(&["old"])).await.unwrap();
    storage.save(&registry_with(&["new"])).await.unwrap();

    let loaded = storage.load().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.contains("new"));
}
