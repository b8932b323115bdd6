//! Durable-store document definitions
//!
//! These are store-specific documents separate from domain models; the
//! durable store owns native ids (ObjectId) and BSON datetimes.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::{Account, Transformation, Video, VideoId};

/// Account document as persisted in the accounts collection.
///
/// `password` is always a salted Argon2 hash on this store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub password: String,
    pub created_at: bson::DateTime,
}

impl From<AccountDocument> for Account {
    fn from(doc: AccountDocument) -> Self {
        Self {
            id: doc
                .id
                .map(|oid| oid.to_hex())
                .unwrap_or_else(|| doc.email.clone()),
            email: doc.email,
            created_at: doc.created_at.to_chrono(),
        }
    }
}

/// Video document as persisted in the videos collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub uploaded_by: String,
    pub controls: bool,
    pub transformation: Transformation,
    pub created_at: bson::DateTime,
}

impl From<VideoDocument> for Video {
    fn from(doc: VideoDocument) -> Self {
        Self {
            id: VideoId::new(
                doc.id
                    .map(|oid| oid.to_hex())
                    .unwrap_or_default(),
            ),
            title: doc.title,
            description: doc.description,
            video_url: doc.video_url,
            thumbnail_url: doc.thumbnail_url,
            uploaded_by: doc.uploaded_by,
            controls: doc.controls,
            transformation: doc.transformation,
            created_at: doc.created_at.to_chrono(),
        }
    }
}
