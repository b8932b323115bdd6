//! Clipstream - Video sharing API core
//!
//! A video-sharing service built on a dual-store persistence layer: a
//! durable document database as the primary store, and a file-backed local
//! fallback store that serves development traffic whenever the primary is
//! unreachable. The choice between them is made per operation.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases (auth, credentials, videos)
//! - **infra**: Persistence backends, store selection, repositories
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Report which store would serve traffic
//! cargo run -- stores
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Account, Password, Video, VideoId};
pub use errors::{AppError, AppResult};
pub use infra::StoreSelector;
