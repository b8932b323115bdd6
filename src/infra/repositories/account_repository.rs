//! Account repository: uniform create/find over the active store.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Account, Password};
use crate::errors::{AppError, AppResult};
use crate::infra::selector::{ActiveStore, StoreSelector};

#[cfg(test)]
use mockall::automock;

/// Account repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Register a new account. Duplicate emails fail with `Conflict` before
    /// any write is attempted.
    async fn create(&self, email: String, password: String) -> AppResult<Account>;

    /// Find an account by its exact (case-sensitive) email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;
}

/// Store-backed implementation hiding the primary/fallback duality.
pub struct AccountStore {
    selector: Arc<StoreSelector>,
}

impl AccountStore {
    pub fn new(selector: Arc<StoreSelector>) -> Self {
        Self { selector }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn create(&self, email: String, password: String) -> AppResult<Account> {
        match self.selector.select().await? {
            ActiveStore::Durable(db) => {
                if db.find_account_by_email(&email).await?.is_some() {
                    return Err(AppError::conflict("Account"));
                }
                let hash = Password::new(&password)?.into_string();
                let document = db.insert_account(email, hash).await?;
                Ok(document.into())
            }
            ActiveStore::Fallback(store) => {
                // Plaintext secret: the fallback store's documented
                // degraded-mode trust level. Uniqueness is checked inside
                // the store's write lock.
                let record = store.create_account(email, password).await?;
                Ok(record.into())
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        match self.selector.select().await? {
            ActiveStore::Durable(db) => Ok(db
                .find_account_by_email(email)
                .await?
                .map(Account::from)),
            ActiveStore::Fallback(store) => {
                Ok(store.find_account_by_email(email).await.map(Account::from))
            }
        }
    }
}
