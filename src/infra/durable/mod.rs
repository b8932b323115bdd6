//! Durable store client (primary, network-backed document database).
//!
//! Owns primary-store reads and writes for both collections. Construction is
//! lazy: building the client does not touch the network, so the process can
//! start while the primary is down. Reachability is probed per operation via
//! `try_connect` with a short, driver-bounded timeout; there is deliberately
//! no retry or backoff (a single attempt per operation is the documented
//! behavior).

pub mod documents;

use std::time::Duration;

use bson::doc;
use futures::stream::TryStreamExt;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};

use crate::config::{ACCOUNTS_COLLECTION, VIDEOS_COLLECTION};
use crate::domain::{NewVideo, VideoId};
use crate::errors::{AppError, AppResult};

pub use documents::{AccountDocument, VideoDocument};

/// Client for the durable document store.
#[derive(Debug)]
pub struct DurableClient {
    client: Client,
    database: Database,
}

impl DurableClient {
    /// Build a client from a connection string.
    ///
    /// Does not establish a connection; the driver connects on first use and
    /// `try_connect` performs the per-operation reachability check.
    pub async fn new(uri: &str, database_name: &str, connect_timeout_ms: u64) -> AppResult<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        // Bound the single connection attempt a selector makes per operation
        options.server_selection_timeout = Some(Duration::from_millis(connect_timeout_ms));
        options.connect_timeout = Some(Duration::from_millis(connect_timeout_ms));

        let client = Client::with_options(options)?;
        let database = client.database(database_name);
        Ok(Self { client, database })
    }

    /// Single connection attempt, reported as a capability rather than an
    /// error: unreachability is an expected condition the selector handles.
    pub async fn try_connect(&self) -> bool {
        match self.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("primary store unreachable: {}", e);
                false
            }
        }
    }

    /// Round-trip connectivity check.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    fn accounts(&self) -> Collection<AccountDocument> {
        self.database.collection(ACCOUNTS_COLLECTION)
    }

    fn videos(&self) -> Collection<VideoDocument> {
        self.database.collection(VIDEOS_COLLECTION)
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    pub async fn find_account_by_email(&self, email: &str) -> AppResult<Option<AccountDocument>> {
        let found = self.accounts().find_one(doc! { "email": email }).await?;
        Ok(found)
    }

    /// Insert an account with an already-hashed credential secret.
    ///
    /// A unique index on `email` is ensured first (idempotent), so a
    /// concurrent registration racing past the facade's read-then-write
    /// check still resolves to a conflict rather than a duplicate account.
    pub async fn insert_account(
        &self,
        email: String,
        password_hash: String,
    ) -> AppResult<AccountDocument> {
        self.ensure_email_index().await?;

        let mut document = AccountDocument {
            id: None,
            email,
            password: password_hash,
            created_at: bson::DateTime::now(),
        };

        let result = self
            .accounts()
            .insert_one(&document)
            .await
            .map_err(|e| map_duplicate_key(e, "Account"))?;

        document.id = result.inserted_id.as_object_id();
        Ok(document)
    }

    async fn ensure_email_index(&self) -> AppResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.accounts().create_index(index).await?;
        Ok(())
    }

    // =========================================================================
    // Videos
    // =========================================================================

    pub async fn insert_video(&self, new: NewVideo) -> AppResult<VideoDocument> {
        let mut document = VideoDocument {
            id: None,
            title: new.title,
            description: new.description,
            video_url: new.video_url,
            thumbnail_url: new.thumbnail_url,
            uploaded_by: new.uploaded_by,
            controls: new.controls,
            transformation: new.transformation,
            created_at: bson::DateTime::now(),
        };

        let result = self.videos().insert_one(&document).await?;
        document.id = result.inserted_id.as_object_id();
        Ok(document)
    }

    /// List all videos, newest first.
    pub async fn list_videos(&self) -> AppResult<Vec<VideoDocument>> {
        let cursor = self
            .videos()
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await?;
        let videos = cursor.try_collect().await?;
        Ok(videos)
    }

    /// Find a video by its native id. An id from the other id space (or any
    /// malformed id) is a plain miss, not an error.
    pub async fn find_video_by_id(&self, id: &VideoId) -> AppResult<Option<VideoDocument>> {
        let oid = match bson::oid::ObjectId::parse_str(id.as_str()) {
            Ok(oid) => oid,
            Err(_) => return Ok(None),
        };
        let found = self.videos().find_one(doc! { "_id": oid }).await?;
        Ok(found)
    }
}

/// Server error code for a unique-index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Map a duplicate-key write error (unique email index) to a Conflict.
fn map_duplicate_key(err: mongodb::error::Error, entity: &str) -> AppError {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == DUPLICATE_KEY_CODE => {
            AppError::conflict(entity)
        }
        _ => AppError::Database(err),
    }
}
