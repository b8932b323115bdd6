//! Video service - upload and listing use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Video, VideoDraft, VideoId};
use crate::errors::{AppResult, OptionExt};
use crate::infra::VideoRepository;

/// Video service trait for dependency injection.
#[async_trait]
pub trait VideoService: Send + Sync {
    /// Persist an uploaded video and return the stored record
    async fn upload(&self, draft: VideoDraft) -> AppResult<Video>;

    /// List all videos, newest first
    async fn list(&self) -> AppResult<Vec<Video>>;

    /// Get a single video by its opaque id
    async fn get(&self, id: &VideoId) -> AppResult<Video>;
}

/// Concrete implementation of VideoService.
pub struct VideoManager {
    videos: Arc<dyn VideoRepository>,
}

impl VideoManager {
    pub fn new(videos: Arc<dyn VideoRepository>) -> Self {
        Self { videos }
    }
}

#[async_trait]
impl VideoService for VideoManager {
    async fn upload(&self, draft: VideoDraft) -> AppResult<Video> {
        self.videos.create(draft).await
    }

    async fn list(&self) -> AppResult<Vec<Video>> {
        self.videos.list().await
    }

    async fn get(&self, id: &VideoId) -> AppResult<Video> {
        self.videos.find_by_id(id).await?.ok_or_not_found()
    }
}
