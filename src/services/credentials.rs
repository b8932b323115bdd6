//! Credential verifier - authenticates a login attempt against whichever
//! store is active.
//!
//! The comparison strategy travels with the store: `HashedCompare` for the
//! durable store, `PlainCompare` for the fallback store. Both failure causes
//! (unknown email, wrong password) collapse into the same
//! `InvalidCredentials` so the login surface cannot enumerate accounts.

use std::sync::Arc;

use crate::domain::{CredentialCheck, Identity};
use crate::errors::{AppError, AppResult};
use crate::infra::{ActiveStore, StoreSelector};

/// Verified against when the email is unknown on the durable path, so the
/// work done (and the error returned) is the same as for a wrong password.
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

/// Authenticates credentials against the active store.
pub struct CredentialVerifier {
    selector: Arc<StoreSelector>,
}

impl CredentialVerifier {
    pub fn new(selector: Arc<StoreSelector>) -> Self {
        Self { selector }
    }

    /// Authenticate an email/password pair.
    ///
    /// Returns the minimal identity on success: the store's opaque id (the
    /// email itself on the fallback path) plus the email.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<Identity> {
        match self.selector.select().await? {
            ActiveStore::Durable(db) => {
                let found = db.find_account_by_email(email).await?;

                let stored = found
                    .as_ref()
                    .map(|account| account.password.as_str())
                    .unwrap_or(DUMMY_PASSWORD_HASH);
                let valid = CredentialCheck::HashedCompare.verify(password, stored);

                match found {
                    Some(account) if valid => Ok(Identity {
                        id: account
                            .id
                            .map(|oid| oid.to_hex())
                            .unwrap_or_else(|| account.email.clone()),
                        email: account.email,
                    }),
                    _ => Err(AppError::InvalidCredentials),
                }
            }
            ActiveStore::Fallback(store) => store
                .find_account_by_credentials(email, password)
                .await
                .map(|account| Identity {
                    id: account.email.clone(),
                    email: account.email,
                })
                .ok_or(AppError::InvalidCredentials),
        }
    }
}
