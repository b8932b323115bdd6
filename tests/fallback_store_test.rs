//! Integration tests for the file-backed fallback store.
//!
//! These tests exercise the backing files directly: persistence across store
//! instances, recovery from missing or corrupt files, the exact wire format,
//! and the production guard.

use std::path::Path;

use tempfile::tempdir;

use clipstream::config::DeploymentMode;
use clipstream::domain::{NewVideo, Transformation};
use clipstream::errors::AppError;
use clipstream::infra::fallback::VideoRecord;
use clipstream::infra::FallbackStore;

fn dev_store(dir: &Path) -> FallbackStore {
    FallbackStore::new(dir, DeploymentMode::Development)
}

fn sample_video(title: &str) -> NewVideo {
    NewVideo {
        title: title.to_string(),
        description: "desc".to_string(),
        video_url: "https://cdn.example/v.mp4".to_string(),
        thumbnail_url: "https://cdn.example/v.jpg".to_string(),
        uploaded_by: "a@x.com".to_string(),
        controls: true,
        transformation: Transformation::default(),
    }
}

#[tokio::test]
async fn test_accounts_survive_store_restart() {
    let dir = tempdir().unwrap();

    {
        let store = dev_store(dir.path());
        store
            .create_account("a@x.com".to_string(), "secret1".to_string())
            .await
            .unwrap();
    }

    // A fresh instance over the same directory sees the persisted record
    let store = dev_store(dir.path());
    let found = store.find_account_by_email("a@x.com").await.unwrap();
    assert_eq!(found.email, "a@x.com");
    assert_eq!(found.password, "secret1");
}

#[tokio::test]
async fn test_missing_file_reads_as_empty() {
    let dir = tempdir().unwrap();
    let store = dev_store(dir.path());

    assert!(store.load_accounts().await.is_empty());
    assert!(store.list_videos().await.is_empty());
    assert!(store.find_account_by_email("nobody@x.com").await.is_none());
}

#[tokio::test]
async fn test_corrupt_file_reads_as_empty() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("accounts.json"), b"{not json!").unwrap();

    let store = dev_store(dir.path());
    assert!(store.load_accounts().await.is_empty());
}

#[tokio::test]
async fn test_duplicate_email_is_a_conflict() {
    let dir = tempdir().unwrap();
    let store = dev_store(dir.path());

    store
        .create_account("a@x.com".to_string(), "secret1".to_string())
        .await
        .unwrap();

    let result = store
        .create_account("a@x.com".to_string(), "other".to_string())
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));

    // The losing write did not touch the file
    assert_eq!(store.load_accounts().await.len(), 1);
}

#[tokio::test]
async fn test_accounts_file_wire_format() {
    let dir = tempdir().unwrap();
    let store = dev_store(dir.path());

    store
        .create_account("a@x.com".to_string(), "secret1".to_string())
        .await
        .unwrap();

    let bytes = std::fs::read(dir.path().join("accounts.json")).unwrap();
    let text = String::from_utf8(bytes).unwrap();

    // Pretty-printed JSON array with camelCase keys
    assert!(text.trim_start().starts_with('['));
    assert!(text.contains('\n'));
    assert!(text.contains("\"createdAt\""));

    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["email"], "a@x.com");
    assert_eq!(records[0]["password"], "secret1");
}

#[tokio::test]
async fn test_videos_file_wire_format() {
    let dir = tempdir().unwrap();
    let store = dev_store(dir.path());

    store.create_video(sample_video("clip")).await.unwrap();

    let bytes = std::fs::read(dir.path().join("videos.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let record = &parsed.as_array().unwrap()[0];

    assert!(record["_id"].as_str().unwrap().starts_with("mock_"));
    assert_eq!(record["title"], "clip");
    assert_eq!(record["videoUrl"], "https://cdn.example/v.mp4");
    assert_eq!(record["thumbnailUrl"], "https://cdn.example/v.jpg");
    assert_eq!(record["uploadedBy"], "a@x.com");
    assert_eq!(record["controls"], true);
    assert_eq!(record["transformation"]["width"], 1280);
    assert_eq!(record["transformation"]["height"], 720);
    assert_eq!(record["transformation"]["quality"], 80);
    assert!(record["createdAt"].is_string());
}

#[tokio::test]
async fn test_videos_listed_newest_first() {
    let dir = tempdir().unwrap();

    // Seed the backing file directly with explicit timestamps
    let older = VideoRecord {
        id: "mock_1_aaaaaaaaa".to_string(),
        title: "older".to_string(),
        description: "d".to_string(),
        video_url: "u".to_string(),
        thumbnail_url: "t".to_string(),
        uploaded_by: "a@x.com".to_string(),
        created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        controls: true,
        transformation: Transformation::default(),
    };
    let newer = VideoRecord {
        id: "mock_2_bbbbbbbbb".to_string(),
        created_at: "2024-06-01T00:00:00Z".parse().unwrap(),
        title: "newer".to_string(),
        ..older.clone()
    };
    std::fs::write(
        dir.path().join("videos.json"),
        serde_json::to_vec_pretty(&[older, newer]).unwrap(),
    )
    .unwrap();

    let store = dev_store(dir.path());
    let listed = store.list_videos().await;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].title, "newer");
    assert_eq!(listed[1].title, "older");
}

#[tokio::test]
async fn test_find_video_by_id() {
    let dir = tempdir().unwrap();
    let store = dev_store(dir.path());

    let created = store.create_video(sample_video("clip")).await.unwrap();

    let found = store.find_video_by_id(&created.id).await.unwrap();
    assert_eq!(found.title, "clip");
    assert!(store.find_video_by_id("mock_0_zzzzzzzzz").await.is_none());
}

#[tokio::test]
async fn test_write_failure_is_surfaced() {
    let dir = tempdir().unwrap();

    // A regular file where the data directory should be makes every write
    // fail at directory creation
    let blocked = dir.path().join("blocked");
    std::fs::write(&blocked, b"not a directory").unwrap();

    let store = dev_store(&blocked);

    let result = store
        .create_account("a@x.com".to_string(), "secret1".to_string())
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Persistence(_)));

    let result = store.create_video(sample_video("clip")).await;
    assert!(matches!(result.unwrap_err(), AppError::Persistence(_)));
}

#[tokio::test]
async fn test_rewrite_leaves_only_the_backing_file() {
    let dir = tempdir().unwrap();
    let store = dev_store(dir.path());

    store
        .create_account("a@x.com".to_string(), "secret1".to_string())
        .await
        .unwrap();
    store
        .create_account("b@x.com".to_string(), "secret2".to_string())
        .await
        .unwrap();

    // No temp files or other intermediates survive a completed write
    let entries: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries, vec!["accounts.json".to_string()]);

    let bytes = std::fs::read(dir.path().join("accounts.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_production_mode_reads_empty_and_drops_writes() {
    let dir = tempdir().unwrap();

    // Seed data through a development-mode store
    {
        let store = dev_store(dir.path());
        store
            .create_account("a@x.com".to_string(), "secret1".to_string())
            .await
            .unwrap();
        store.create_video(sample_video("clip")).await.unwrap();
    }

    let store = FallbackStore::new(dir.path(), DeploymentMode::Production);

    // Reads come back empty even though the files hold data
    assert!(store.load_accounts().await.is_empty());
    assert!(store.list_videos().await.is_empty());
    assert!(store.find_account_by_email("a@x.com").await.is_none());

    // Writes report success but never reach the files
    store
        .create_account("b@x.com".to_string(), "secret2".to_string())
        .await
        .unwrap();
    store.create_video(sample_video("dropped")).await.unwrap();

    let dev = dev_store(dir.path());
    assert_eq!(dev.load_accounts().await.len(), 1);
    assert_eq!(dev.list_videos().await.len(), 1);
}
