//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, video_handler};
use crate::domain::{AccountResponse, Transformation, TransformationParams, VideoResponse};
use crate::services::TokenResponse;

/// OpenAPI documentation for Clipstream
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clipstream",
        version = "0.1.0",
        description = "Video sharing API with automatic primary/fallback persistence",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // Video endpoints
        video_handler::list_videos,
        video_handler::upload_video,
        video_handler::get_video,
    ),
    components(
        schemas(
            // Domain types
            AccountResponse,
            VideoResponse,
            Transformation,
            TransformationParams,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            TokenResponse,
            // Video handler types
            video_handler::UploadVideoRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Account registration and login"),
        (name = "Videos", description = "Video upload and browsing")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
