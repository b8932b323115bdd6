//! Fallback-store record definitions
//!
//! Exact wire format of the backing files: pretty-printed JSON arrays of
//! these records, with ISO 8601 timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Account, Transformation, Video, VideoId};

/// Account record as persisted in the accounts file.
///
/// `password` is plaintext on this store; that trust reduction is the
/// documented degraded-mode behavior and the production guard keeps it out
/// of real deployments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Self {
            // The email doubles as the id; the fallback store has no other
            // unique identifier.
            id: record.email.clone(),
            email: record.email,
            created_at: record.created_at,
        }
    }
}

/// Video record as persisted in the videos file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
    pub controls: bool,
    pub transformation: Transformation,
}

impl From<VideoRecord> for Video {
    fn from(record: VideoRecord) -> Self {
        Self {
            id: VideoId::new(record.id),
            title: record.title,
            description: record.description,
            video_url: record.video_url,
            thumbnail_url: record.thumbnail_url,
            uploaded_by: record.uploaded_by,
            controls: record.controls,
            transformation: record.transformation,
            created_at: record.created_at,
        }
    }
}
