//! Video repository: uniform create/list/find over the active store.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Video, VideoDraft, VideoId};
use crate::errors::AppResult;
use crate::infra::selector::{ActiveStore, StoreSelector};

#[cfg(test)]
use mockall::automock;

/// Video repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Persist a video. Field defaults (controls, per-field transformation)
    /// are resolved here, once, so both backends receive fully-populated
    /// records.
    async fn create(&self, draft: VideoDraft) -> AppResult<Video>;

    /// All videos, newest first.
    async fn list(&self) -> AppResult<Vec<Video>>;

    /// Find a video by its opaque id.
    async fn find_by_id(&self, id: &VideoId) -> AppResult<Option<Video>>;
}

/// Store-backed implementation hiding the primary/fallback duality.
pub struct VideoStore {
    selector: Arc<StoreSelector>,
}

impl VideoStore {
    pub fn new(selector: Arc<StoreSelector>) -> Self {
        Self { selector }
    }
}

#[async_trait]
impl VideoRepository for VideoStore {
    async fn create(&self, draft: VideoDraft) -> AppResult<Video> {
        let new = draft.resolve();
        match self.selector.select().await? {
            ActiveStore::Durable(db) => Ok(db.insert_video(new).await?.into()),
            ActiveStore::Fallback(store) => Ok(store.create_video(new).await?.into()),
        }
    }

    async fn list(&self) -> AppResult<Vec<Video>> {
        match self.selector.select().await? {
            ActiveStore::Durable(db) => Ok(db
                .list_videos()
                .await?
                .into_iter()
                .map(Video::from)
                .collect()),
            ActiveStore::Fallback(store) => Ok(store
                .list_videos()
                .await
                .into_iter()
                .map(Video::from)
                .collect()),
        }
    }

    async fn find_by_id(&self, id: &VideoId) -> AppResult<Option<Video>> {
        match self.selector.select().await? {
            ActiveStore::Durable(db) => Ok(db.find_video_by_id(id).await?.map(Video::from)),
            ActiveStore::Fallback(store) => {
                Ok(store.find_video_by_id(id.as_str()).await.map(Video::from))
            }
        }
    }
}
