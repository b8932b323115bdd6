//! Local fallback store: file-backed persistence for degraded/development
//! operation.
//!
//! Two independently-keyed collections (accounts, videos), each backed by one
//! JSON file. Every write is a whole-file rewrite of the exact current set
//! (load, modify, store all), so the file is always valid JSON; O(n) I/O per
//! write is acceptable on this non-performance-critical path. Each collection
//! serializes its load-modify-store sequence behind its own async mutex, and
//! uniqueness checks run inside that critical section.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::config::{
    ACCOUNTS_FILE, DeploymentMode, FALLBACK_ID_PREFIX, FALLBACK_ID_SUFFIX_LEN, VIDEOS_FILE,
};
use crate::domain::{CredentialCheck, NewVideo, VideoId};
use crate::errors::{AppError, AppResult};

use super::records::{AccountRecord, VideoRecord};

/// One file-backed collection.
#[derive(Debug)]
struct JsonCollection<T> {
    path: PathBuf,
    /// Serializes the load-modify-store sequence; concurrent writers racing
    /// on the same backing file would otherwise lose updates.
    lock: Mutex<()>,
    _record: PhantomData<T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    /// Read the full record sequence.
    ///
    /// Any read or parse failure (file absent included) recovers to an empty
    /// sequence: an absent file means nothing has been persisted yet.
    async fn load(&self) -> Vec<T> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                tracing::warn!(
                    "unreadable fallback file {}: {}; treating as empty",
                    self.path.display(),
                    e
                );
                Vec::new()
            }),
            Err(_) => Vec::new(),
        }
    }

    /// Append one record produced by `make`, which observes the current set
    /// (for uniqueness checks) inside the critical section.
    ///
    /// Unlike `load`, a failed write is surfaced: the caller must know the
    /// record did not reach stable storage.
    async fn insert_with<F>(&self, make: F) -> AppResult<T>
    where
        F: FnOnce(&[T]) -> AppResult<T>,
    {
        let _guard = self.lock.lock().await;

        let mut records = self.load().await;
        let record = make(&records)?;
        records.push(record.clone());
        self.store(&records).await?;
        Ok(record)
    }

    /// Rewrite the whole backing file, creating the directory on first use.
    ///
    /// The new contents go to a sibling temp file and are renamed into
    /// place; the target file is never truncated in place, so an interrupted
    /// write cannot destroy the previously persisted records.
    async fn store(&self, records: &[T]) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            // Create-if-missing is idempotent and safe under concurrency
            tokio::fs::create_dir_all(dir).await?;
        }
        let bytes = serde_json::to_vec_pretty(records)
            .map_err(|e| AppError::internal(format!("Failed to encode fallback file: {}", e)))?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

/// Local fallback store for both entity kinds.
///
/// Refuses to operate in production deployments: reads return empty, writes
/// are no-ops. That guard never throws past this boundary, but it is logged
/// loudly because reaching it means the deployment is misconfigured.
#[derive(Debug)]
pub struct FallbackStore {
    mode: DeploymentMode,
    accounts: JsonCollection<AccountRecord>,
    videos: JsonCollection<VideoRecord>,
}

impl FallbackStore {
    pub fn new(data_dir: &Path, mode: DeploymentMode) -> Self {
        Self {
            mode,
            accounts: JsonCollection::new(data_dir.join(ACCOUNTS_FILE)),
            videos: JsonCollection::new(data_dir.join(VIDEOS_FILE)),
        }
    }

    /// Production guard for writes. The violation is constructed so it can be
    /// logged with full context, then swallowed into a no-op by callers.
    fn write_guard(&self) -> AppResult<()> {
        if self.mode.is_production() {
            return Err(AppError::ProductionGuard);
        }
        Ok(())
    }

    fn reads_disabled(&self) -> bool {
        if self.mode.is_production() {
            tracing::error!("fallback store read attempted in production mode; returning empty");
            return true;
        }
        false
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    pub async fn load_accounts(&self) -> Vec<AccountRecord> {
        if self.reads_disabled() {
            return Vec::new();
        }
        self.accounts.load().await
    }

    /// Create an account, enforcing email uniqueness inside the write lock.
    ///
    /// The password is stored as plaintext; see `AccountRecord`.
    pub async fn create_account(&self, email: String, password: String) -> AppResult<AccountRecord> {
        if let Err(violation) = self.write_guard() {
            tracing::error!(
                "fallback store write attempted in production mode ({}); record dropped",
                violation
            );
            return Ok(AccountRecord {
                email,
                password,
                created_at: Utc::now(),
            });
        }

        self.accounts
            .insert_with(|existing| {
                if existing.iter().any(|a| a.email == email) {
                    return Err(AppError::conflict("Account"));
                }
                Ok(AccountRecord {
                    email: email.clone(),
                    password: password.clone(),
                    created_at: Utc::now(),
                })
            })
            .await
    }

    pub async fn find_account_by_email(&self, email: &str) -> Option<AccountRecord> {
        self.load_accounts()
            .await
            .into_iter()
            .find(|a| a.email == email)
    }

    /// Exact email + plaintext password match.
    pub async fn find_account_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Option<AccountRecord> {
        self.load_accounts()
            .await
            .into_iter()
            .find(|a| a.email == email && CredentialCheck::PlainCompare.verify(password, &a.password))
    }

    // =========================================================================
    // Videos
    // =========================================================================

    /// Persist a fully-populated video, synthesizing an identifier.
    pub async fn create_video(&self, new: NewVideo) -> AppResult<VideoRecord> {
        let now = Utc::now();
        let record = VideoRecord {
            id: synthesize_video_id(now).into_string(),
            title: new.title,
            description: new.description,
            video_url: new.video_url,
            thumbnail_url: new.thumbnail_url,
            uploaded_by: new.uploaded_by,
            created_at: now,
            controls: new.controls,
            transformation: new.transformation,
        };

        if let Err(violation) = self.write_guard() {
            tracing::error!(
                "fallback store write attempted in production mode ({}); record dropped",
                violation
            );
            return Ok(record);
        }

        self.videos.insert_with(move |_| Ok(record)).await
    }

    /// All videos, ordered by creation time descending.
    pub async fn list_videos(&self) -> Vec<VideoRecord> {
        if self.reads_disabled() {
            return Vec::new();
        }
        let mut videos = self.videos.load().await;
        videos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        videos
    }

    pub async fn find_video_by_id(&self, id: &str) -> Option<VideoRecord> {
        if self.reads_disabled() {
            return None;
        }
        self.videos.load().await.into_iter().find(|v| v.id == id)
    }
}

/// Synthesize a fallback video id: `mock_<millis>_<random base36 suffix>`.
fn synthesize_video_id(now: DateTime<Utc>) -> VideoId {
    const CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..FALLBACK_ID_SUFFIX_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    VideoId::new(format!(
        "{}_{}_{}",
        FALLBACK_ID_PREFIX,
        now.timestamp_millis(),
        suffix
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_id_shape() {
        let now = Utc::now();
        let id = synthesize_video_id(now);
        let parts: Vec<&str> = id.as_str().splitn(3, '_').collect();
        assert_eq!(parts[0], "mock");
        assert_eq!(parts[1], now.timestamp_millis().to_string());
        assert_eq!(parts[2].len(), FALLBACK_ID_SUFFIX_LEN);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
