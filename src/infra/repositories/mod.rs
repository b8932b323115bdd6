//! Repository layer - the facade over the store duality.
//!
//! Callers see uniform create/find operations; which backend serves a given
//! operation is the selector's per-operation decision and never leaks out.

mod account_repository;
mod video_repository;

pub use account_repository::{AccountRepository, AccountStore};
pub use video_repository::{VideoRepository, VideoStore};

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use video_repository::MockVideoRepository;
