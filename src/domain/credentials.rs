//! Credential comparison strategies and the authenticated identity.
//!
//! Each store carries its own trust level: the durable store holds salted
//! Argon2 hashes, the fallback store holds plaintext (a documented
//! degraded-mode trade-off, never active in production). The strategy is
//! selected alongside the store, so adding a backend means supplying a new
//! variant rather than branching inside the verifier.

use super::Password;

/// How a supplied password is compared against the stored secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialCheck {
    /// Argon2 hashed comparison (durable store).
    HashedCompare,
    /// Exact plaintext equality (fallback store only).
    PlainCompare,
}

impl CredentialCheck {
    /// Verify a supplied password against the stored secret.
    pub fn verify(self, supplied: &str, stored: &str) -> bool {
        match self {
            CredentialCheck::HashedCompare => {
                Password::from_hash(stored.to_string()).verify(supplied)
            }
            CredentialCheck::PlainCompare => supplied == stored,
        }
    }
}

/// Minimal authenticated-user record returned by the credential verifier.
///
/// `id` is opaque: the durable store's native id, or the email itself on the
/// fallback path (no other unique id exists there).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_compare_exact_equality() {
        assert!(CredentialCheck::PlainCompare.verify("secret1", "secret1"));
        assert!(!CredentialCheck::PlainCompare.verify("secret1", "Secret1"));
        assert!(!CredentialCheck::PlainCompare.verify("secret1", ""));
    }

    #[test]
    fn test_hashed_compare_against_real_hash() {
        let hash = Password::new("secret1").unwrap().into_string();
        assert!(CredentialCheck::HashedCompare.verify("secret1", &hash));
        assert!(!CredentialCheck::HashedCompare.verify("secret2", &hash));
    }

    #[test]
    fn test_hashed_compare_never_matches_plaintext_storage() {
        // A plaintext secret is not a valid hash and must not verify
        assert!(!CredentialCheck::HashedCompare.verify("secret1", "secret1"));
    }
}
