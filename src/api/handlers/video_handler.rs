//! Video handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{CurrentUser, ValidatedJson};
use crate::api::AppState;
use crate::domain::{TransformationParams, VideoDraft, VideoId, VideoResponse};
use crate::errors::AppResult;

/// Video upload request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadVideoRequest {
    /// Video title
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "My first clip")]
    pub title: String,
    /// Video description
    #[validate(length(min = 1, message = "Description is required"))]
    #[schema(example = "A short demo clip")]
    pub description: String,
    /// URL of the uploaded video asset
    #[validate(length(min = 1, message = "Video URL is required"))]
    #[schema(example = "https://cdn.example.com/videos/abc.mp4")]
    pub video_url: String,
    /// URL of the thumbnail image
    #[validate(length(min = 1, message = "Thumbnail URL is required"))]
    #[schema(example = "https://cdn.example.com/thumbs/abc.jpg")]
    pub thumbnail_url: String,
    /// Whether player controls are shown (defaults to true)
    pub controls: Option<bool>,
    /// Playback transformation; missing fields take defaults individually
    #[validate(nested)]
    pub transformation: Option<TransformationParams>,
}

/// Create video routes
pub fn video_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_videos).post(upload_video))
        .route("/:id", get(get_video))
}

/// List all videos, newest first
#[utoipa::path(
    get,
    path = "/videos",
    tag = "Videos",
    responses(
        (status = 200, description = "List of videos", body = Vec<VideoResponse>),
        (status = 503, description = "No store available")
    )
)]
pub async fn list_videos(State(state): State<AppState>) -> AppResult<Json<Vec<VideoResponse>>> {
    let videos = state.video_service.list().await?;

    Ok(Json(videos.into_iter().map(VideoResponse::from).collect()))
}

/// Upload a new video (requires authentication)
#[utoipa::path(
    post,
    path = "/videos",
    tag = "Videos",
    security(("bearer_auth" = [])),
    request_body = UploadVideoRequest,
    responses(
        (status = 201, description = "Video created", body = VideoResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 503, description = "No store available")
    )
)]
pub async fn upload_video(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<UploadVideoRequest>,
) -> AppResult<(StatusCode, Json<VideoResponse>)> {
    let draft = VideoDraft {
        title: payload.title,
        description: payload.description,
        video_url: payload.video_url,
        thumbnail_url: payload.thumbnail_url,
        uploaded_by: Some(user.email),
        controls: payload.controls,
        transformation: payload.transformation,
    };

    let video = state.video_service.upload(draft).await?;

    Ok((StatusCode::CREATED, Json(VideoResponse::from(video))))
}

/// Get a single video by id
#[utoipa::path(
    get,
    path = "/videos/{id}",
    tag = "Videos",
    params(
        ("id" = String, Path, description = "Opaque video identifier")
    ),
    responses(
        (status = 200, description = "Video found", body = VideoResponse),
        (status = 404, description = "Video not found"),
        (status = 503, description = "No store available")
    )
)]
pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<VideoResponse>> {
    let video = state.video_service.get(&VideoId::new(id)).await?;

    Ok(Json(VideoResponse::from(video)))
}
