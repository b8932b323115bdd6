//! Infrastructure layer - persistence backends and their selection
//!
//! This module owns all storage concerns:
//! - Durable store client (primary document database)
//! - Local fallback store (file-backed, non-production-only)
//! - Per-operation store selection
//! - Repository facade consumed by the service layer

pub mod durable;
pub mod fallback;
pub mod repositories;
pub mod selector;

pub use durable::DurableClient;
pub use fallback::FallbackStore;
pub use repositories::{AccountRepository, AccountStore, VideoRepository, VideoStore};
pub use selector::{ActiveStore, StoreSelector};
