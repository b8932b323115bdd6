//! Local fallback store (file-backed, non-production-only persistence).

mod records;
mod store;

pub use records::{AccountRecord, VideoRecord};
pub use store::FallbackStore;
