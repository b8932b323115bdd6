//! Authentication service - registration, login, and session tokens.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{Account, Identity};
use crate::errors::AppResult;
use crate::infra::AccountRepository;

use super::credentials::CredentialVerifier;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Opaque account id (durable-store native id, or the email on the
    /// fallback path)
    pub sub: String,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new account
    async fn register(&self, email: String, password: String) -> AppResult<Account>;

    /// Login and return a JWT token
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Verify a JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate JWT token for an authenticated identity
fn generate_token(identity: &Identity, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: identity.id.clone(),
        email: identity.email.clone(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours * SECONDS_PER_HOUR,
    })
}

/// Verify JWT token and extract claims (shared helper)
fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    accounts: Arc<dyn AccountRepository>,
    verifier: CredentialVerifier,
    config: Config,
}

impl Authenticator {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        verifier: CredentialVerifier,
        config: Config,
    ) -> Self {
        Self {
            accounts,
            verifier,
            config,
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, email: String, password: String) -> AppResult<Account> {
        // Email format and password length are validated by the handler's
        // ValidatedJson extractor; the repository enforces email uniqueness
        // against the active store before writing.
        self.accounts.create(email, password).await
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let identity = self.verifier.authenticate(&email, &password).await?;
        generate_token(&identity, &self.config)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::DeploymentMode;
    use crate::errors::AppError;
    use crate::infra::repositories::MockAccountRepository;
    use crate::infra::{FallbackStore, StoreSelector};

    fn authenticator_with(accounts: Arc<dyn AccountRepository>) -> Authenticator {
        let dir = tempfile::tempdir().unwrap();
        let fallback = Arc::new(FallbackStore::new(dir.path(), DeploymentMode::Development));
        let selector = Arc::new(StoreSelector::new(
            None,
            fallback,
            DeploymentMode::Development,
        ));
        Authenticator::new(accounts, CredentialVerifier::new(selector), Config::for_tests())
    }

    #[tokio::test]
    async fn test_register_delegates_to_repository() {
        let mut repo = MockAccountRepository::new();
        repo.expect_create()
            .withf(|email, password| email == "a@x.com" && password == "secret1")
            .returning(|email, _| {
                Ok(Account {
                    id: email.clone(),
                    email,
                    created_at: Utc::now(),
                })
            });

        let auth = authenticator_with(Arc::new(repo));
        let account = auth
            .register("a@x.com".to_string(), "secret1".to_string())
            .await
            .unwrap();
        assert_eq!(account.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_register_surfaces_repository_conflict() {
        let mut repo = MockAccountRepository::new();
        repo.expect_create()
            .returning(|_, _| Err(AppError::conflict("Account")));

        let auth = authenticator_with(Arc::new(repo));
        let result = auth
            .register("a@x.com".to_string(), "secret1".to_string())
            .await;
        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[test]
    fn test_token_round_trip() {
        let config = Config::for_tests();
        let identity = Identity {
            id: "656f1f77bcf86cd799439011".to_string(),
            email: "a@x.com".to_string(),
        };

        let token = generate_token(&identity, &config).unwrap();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(
            token.expires_in,
            config.jwt_expiration_hours * SECONDS_PER_HOUR
        );

        let claims = verify_token_internal(&token.access_token, &config).unwrap();
        assert_eq!(claims.sub, identity.id);
        assert_eq!(claims.email, identity.email);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let config = Config::for_tests();
        let identity = Identity {
            id: "a@x.com".to_string(),
            email: "a@x.com".to_string(),
        };

        let token = generate_token(&identity, &config).unwrap();
        let mut tampered = token.access_token;
        tampered.pop();

        assert!(verify_token_internal(&tampered, &config).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let config = Config::for_tests();
        assert!(verify_token_internal("not-a-jwt", &config).is_err());
    }
}
