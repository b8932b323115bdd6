//! Account domain entity and related types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Account domain entity.
///
/// The credential secret stays inside the store that owns it (hashed in the
/// durable store, plaintext in the fallback store); it never crosses the
/// repository boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Opaque identifier: the durable store's native id, or the email on the
    /// fallback path.
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Account response (safe to return to clients)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    /// Account email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            email: account.email,
            created_at: account.created_at,
        }
    }
}
