//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{AccountStore, StoreSelector, VideoStore};
use crate::services::{AuthService, Authenticator, CredentialVerifier, VideoManager, VideoService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Video service
    pub video_service: Arc<dyn VideoService>,
    /// Store selector (exposed for health reporting)
    pub selector: Arc<StoreSelector>,
}

impl AppState {
    /// Wire the full service stack on top of a store selector.
    ///
    /// This is the recommended way to create AppState: repositories, the
    /// credential verifier and both services all share the same selector,
    /// so every operation goes through the same per-operation store choice.
    pub fn from_selector(selector: Arc<StoreSelector>, config: Config) -> Self {
        let accounts = Arc::new(AccountStore::new(selector.clone()));
        let videos = Arc::new(VideoStore::new(selector.clone()));
        let verifier = CredentialVerifier::new(selector.clone());

        Self {
            auth_service: Arc::new(Authenticator::new(accounts, verifier, config)),
            video_service: Arc::new(VideoManager::new(videos)),
            selector,
        }
    }

    /// Create application state with manually injected services (tests).
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        video_service: Arc<dyn VideoService>,
        selector: Arc<StoreSelector>,
    ) -> Self {
        Self {
            auth_service,
            video_service,
            selector,
        }
    }
}
