//! Video domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::{
    ANONYMOUS_UPLOADER, DEFAULT_VIDEO_HEIGHT, DEFAULT_VIDEO_QUALITY, DEFAULT_VIDEO_WIDTH,
};

/// Opaque video identifier.
///
/// The durable store uses its native id (ObjectId hex); the fallback store
/// synthesizes `mock_<millis>_<suffix>`. The two id spaces are not
/// interchangeable and callers must not pattern-match on the shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Playback transformation applied by the media host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Transformation {
    pub width: u32,
    pub height: u32,
    pub quality: u32,
}

impl Default for Transformation {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIDEO_WIDTH,
            height: DEFAULT_VIDEO_HEIGHT,
            quality: DEFAULT_VIDEO_QUALITY,
        }
    }
}

/// Partial transformation as supplied by callers; missing fields take
/// defaults individually.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct TransformationParams {
    /// Output width in pixels
    #[schema(example = 1280)]
    pub width: Option<u32>,
    /// Output height in pixels
    #[schema(example = 720)]
    pub height: Option<u32>,
    /// Output quality, 0-100
    #[validate(range(max = 100, message = "Quality must be between 0 and 100"))]
    #[schema(example = 80)]
    pub quality: Option<u32>,
}

impl TransformationParams {
    /// Fill defaults field-by-field, not as an all-or-nothing fallback.
    pub fn resolve(self) -> Transformation {
        Transformation {
            width: self.width.unwrap_or(DEFAULT_VIDEO_WIDTH),
            height: self.height.unwrap_or(DEFAULT_VIDEO_HEIGHT),
            quality: self.quality.unwrap_or(DEFAULT_VIDEO_QUALITY),
        }
    }
}

/// Video domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub uploaded_by: String,
    pub controls: bool,
    pub transformation: Transformation,
    pub created_at: DateTime<Utc>,
}

/// Video creation data as it arrives from callers, before defaults.
#[derive(Debug, Clone)]
pub struct VideoDraft {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    /// Creator email; `None` for anonymous/unauthenticated creation paths.
    pub uploaded_by: Option<String>,
    pub controls: Option<bool>,
    pub transformation: Option<TransformationParams>,
}

impl VideoDraft {
    /// Apply field defaults, producing a fully-populated record.
    ///
    /// Done once, at the repository facade, so both backends receive complete
    /// records and never need their own default logic.
    pub fn resolve(self) -> NewVideo {
        NewVideo {
            title: self.title,
            description: self.description,
            video_url: self.video_url,
            thumbnail_url: self.thumbnail_url,
            uploaded_by: self
                .uploaded_by
                .filter(|email| !email.is_empty())
                .unwrap_or_else(|| ANONYMOUS_UPLOADER.to_string()),
            controls: self.controls.unwrap_or(true),
            transformation: self.transformation.unwrap_or_default().resolve(),
        }
    }
}

/// Fully-populated video record handed to a backend for persistence.
/// Id and creation time are assigned by the backend that stores it.
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub uploaded_by: String,
    pub controls: bool,
    pub transformation: Transformation,
}

/// Video response (wire format matches the persisted shape)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    /// Opaque video identifier
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub uploaded_by: String,
    pub controls: bool,
    pub transformation: Transformation,
    pub created_at: DateTime<Utc>,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        Self {
            id: video.id.into_string(),
            title: video.title,
            description: video.description,
            video_url: video.video_url,
            thumbnail_url: video.thumbnail_url,
            uploaded_by: video.uploaded_by,
            controls: video.controls,
            transformation: video.transformation,
            created_at: video.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> VideoDraft {
        VideoDraft {
            title: "t".to_string(),
            description: "d".to_string(),
            video_url: "https://cdn.example/v.mp4".to_string(),
            thumbnail_url: "https://cdn.example/v.jpg".to_string(),
            uploaded_by: None,
            controls: None,
            transformation: None,
        }
    }

    #[test]
    fn test_defaults_applied_when_transformation_missing() {
        let new = draft().resolve();
        assert_eq!(new.transformation.width, 1280);
        assert_eq!(new.transformation.height, 720);
        assert_eq!(new.transformation.quality, 80);
        assert!(new.controls);
    }

    #[test]
    fn test_defaults_filled_per_field() {
        let mut d = draft();
        d.transformation = Some(TransformationParams {
            width: Some(640),
            height: None,
            quality: None,
        });
        let new = d.resolve();
        assert_eq!(new.transformation.width, 640);
        assert_eq!(new.transformation.height, 720);
        assert_eq!(new.transformation.quality, 80);
    }

    #[test]
    fn test_anonymous_uploader_sentinel() {
        assert_eq!(draft().resolve().uploaded_by, "anonymous");

        let mut d = draft();
        d.uploaded_by = Some(String::new());
        assert_eq!(d.resolve().uploaded_by, "anonymous");

        let mut d = draft();
        d.uploaded_by = Some("a@x.com".to_string());
        assert_eq!(d.resolve().uploaded_by, "a@x.com");
    }

    #[test]
    fn test_controls_can_be_disabled() {
        let mut d = draft();
        d.controls = Some(false);
        assert!(!d.resolve().controls);
    }
}
