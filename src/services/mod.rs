//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the repository facade to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod auth_service;
mod credentials;
mod video_service;

pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use credentials::CredentialVerifier;
pub use video_service::{VideoManager, VideoService};
