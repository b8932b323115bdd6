//! Integration tests for the repository facade and store selector.
//!
//! The durable store is pointed at an unreachable address with a short
//! probe timeout, so every operation exercises the per-operation selection
//! path and lands on the fallback store.

use std::path::Path;
use std::sync::Arc;

use tempfile::tempdir;

use clipstream::config::DeploymentMode;
use clipstream::domain::{TransformationParams, VideoDraft, VideoId};
use clipstream::errors::AppError;
use clipstream::infra::{
    AccountRepository, AccountStore, DurableClient, FallbackStore, StoreSelector, VideoRepository,
    VideoStore,
};
use clipstream::services::CredentialVerifier;

/// A durable client that will never reach a server (nothing listens on the
/// port), with a tight probe bound so tests stay fast.
async fn unreachable_durable() -> Arc<DurableClient> {
    Arc::new(
        DurableClient::new("mongodb://127.0.0.1:9", "clipstream_test", 200)
            .await
            .unwrap(),
    )
}

async fn dev_selector(data_dir: &Path) -> Arc<StoreSelector> {
    let fallback = Arc::new(FallbackStore::new(data_dir, DeploymentMode::Development));
    Arc::new(StoreSelector::new(
        Some(unreachable_durable().await),
        fallback,
        DeploymentMode::Development,
    ))
}

fn draft(title: &str) -> VideoDraft {
    VideoDraft {
        title: title.to_string(),
        description: "desc".to_string(),
        video_url: "https://cdn.example/v.mp4".to_string(),
        thumbnail_url: "https://cdn.example/v.jpg".to_string(),
        uploaded_by: Some("a@x.com".to_string()),
        controls: None,
        transformation: None,
    }
}

#[tokio::test]
async fn test_selector_falls_back_when_primary_unreachable() {
    let dir = tempdir().unwrap();
    let selector = dev_selector(dir.path()).await;

    assert!(!selector.try_connect().await);

    let store = selector.select().await.unwrap();
    assert_eq!(store.name(), "fallback");
}

#[tokio::test]
async fn test_selector_without_configured_primary_falls_back() {
    let dir = tempdir().unwrap();
    let fallback = Arc::new(FallbackStore::new(dir.path(), DeploymentMode::Development));
    let selector = StoreSelector::new(None, fallback, DeploymentMode::Development);

    assert!(!selector.try_connect().await);
    assert_eq!(selector.select().await.unwrap().name(), "fallback");
}

#[tokio::test]
async fn test_production_outage_is_unavailability_not_fallback() {
    let dir = tempdir().unwrap();
    let fallback = Arc::new(FallbackStore::new(dir.path(), DeploymentMode::Production));
    let selector = Arc::new(StoreSelector::new(
        Some(unreachable_durable().await),
        fallback,
        DeploymentMode::Production,
    ));

    assert!(matches!(
        selector.select().await.unwrap_err(),
        AppError::Unavailable
    ));

    // The facade surfaces the same unavailability
    let accounts = AccountStore::new(selector);
    let result = accounts
        .create("a@x.com".to_string(), "secret1".to_string())
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Unavailable));
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let dir = tempdir().unwrap();
    let accounts = AccountStore::new(dev_selector(dir.path()).await);

    let account = accounts
        .create("a@x.com".to_string(), "secret1".to_string())
        .await
        .unwrap();
    assert_eq!(account.email, "a@x.com");

    let result = accounts
        .create("a@x.com".to_string(), "other".to_string())
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_authenticate_round_trip() {
    let dir = tempdir().unwrap();
    let selector = dev_selector(dir.path()).await;
    let accounts = AccountStore::new(selector.clone());
    let verifier = CredentialVerifier::new(selector);

    accounts
        .create("a@x.com".to_string(), "secret1".to_string())
        .await
        .unwrap();

    let identity = verifier.authenticate("a@x.com", "secret1").await.unwrap();
    assert_eq!(identity.email, "a@x.com");
    assert!(!identity.id.is_empty());
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
    let dir = tempdir().unwrap();
    let selector = dev_selector(dir.path()).await;
    let accounts = AccountStore::new(selector.clone());
    let verifier = CredentialVerifier::new(selector);

    accounts
        .create("a@x.com".to_string(), "secret1".to_string())
        .await
        .unwrap();

    let wrong_password = verifier.authenticate("a@x.com", "bad").await.unwrap_err();
    let unknown_email = verifier.authenticate("b@x.com", "secret1").await.unwrap_err();

    assert!(matches!(wrong_password, AppError::InvalidCredentials));
    assert!(matches!(unknown_email, AppError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn test_upload_applies_defaults_per_field() {
    let dir = tempdir().unwrap();
    let videos = VideoStore::new(dev_selector(dir.path()).await);

    let mut d = draft("partial");
    d.transformation = Some(TransformationParams {
        width: Some(640),
        height: None,
        quality: None,
    });

    let video = videos.create(d).await.unwrap();
    assert_eq!(video.transformation.width, 640);
    assert_eq!(video.transformation.height, 720);
    assert_eq!(video.transformation.quality, 80);
    assert!(video.controls);
    assert!(video.id.as_str().starts_with("mock_"));
}

#[tokio::test]
async fn test_upload_without_uploader_records_anonymous() {
    let dir = tempdir().unwrap();
    let videos = VideoStore::new(dev_selector(dir.path()).await);

    let mut d = draft("anon");
    d.uploaded_by = None;

    let video = videos.create(d).await.unwrap();
    assert_eq!(video.uploaded_by, "anonymous");
}

#[tokio::test]
async fn test_list_returns_newest_first() {
    let dir = tempdir().unwrap();
    let videos = VideoStore::new(dev_selector(dir.path()).await);

    videos.create(draft("first")).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    videos.create(draft("second")).await.unwrap();

    let listed = videos.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].title, "second");
    assert_eq!(listed[1].title, "first");
}

#[tokio::test]
async fn test_find_by_id_round_trip() {
    let dir = tempdir().unwrap();
    let videos = VideoStore::new(dev_selector(dir.path()).await);

    let created = videos.create(draft("clip")).await.unwrap();

    let found = videos.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(found.title, "clip");

    let missing = videos
        .find_by_id(&VideoId::new("mock_0_zzzzzzzzz"))
        .await
        .unwrap();
    assert!(missing.is_none());
}
