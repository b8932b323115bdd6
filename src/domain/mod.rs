//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod account;
pub mod credentials;
pub mod password;
pub mod video;

pub use account::{Account, AccountResponse};
pub use credentials::{CredentialCheck, Identity};
pub use password::Password;
pub use video::{
    NewVideo, Transformation, TransformationParams, Video, VideoDraft, VideoId, VideoResponse,
};
