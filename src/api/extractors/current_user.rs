//! JWT bearer-token extractor for protected routes.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;

/// Authenticated user extracted from a JWT bearer token.
///
/// `id` is the opaque account id from the token's `sub` claim; its shape
/// depends on which store authenticated the session and must not be
/// interpreted.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = auth_header
            .strip_prefix(BEARER_TOKEN_PREFIX)
            .ok_or(AppError::Unauthorized)?;

        let claims = state.auth_service.verify_token(token)?;

        Ok(CurrentUser {
            id: claims.sub,
            email: claims.email,
        })
    }
}
