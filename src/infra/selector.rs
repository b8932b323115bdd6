//! Store selector: per-operation choice between the durable primary store
//! and the local fallback store.
//!
//! The connectivity check is a visible capability probe (`try_connect`),
//! not an exception swallow, and it runs independently for every operation:
//! no up/down flag is cached, so a recovered primary is used again on the
//! very next operation at the cost of one connection attempt per operation
//! while it is down.

use std::sync::Arc;

use crate::config::DeploymentMode;
use crate::errors::{AppError, AppResult};

use super::durable::DurableClient;
use super::fallback::FallbackStore;

/// The store chosen to serve one operation. Exactly one store serves any
/// single operation; a read is never split across both.
#[derive(Clone, Debug)]
pub enum ActiveStore {
    Durable(Arc<DurableClient>),
    Fallback(Arc<FallbackStore>),
}

impl ActiveStore {
    /// Human-readable store name, for logs and health reporting.
    pub fn name(&self) -> &'static str {
        match self {
            ActiveStore::Durable(_) => "durable",
            ActiveStore::Fallback(_) => "fallback",
        }
    }
}

/// Per-operation store selection.
pub struct StoreSelector {
    /// Absent when no primary-store URI is configured, which counts as
    /// permanently unreachable.
    durable: Option<Arc<DurableClient>>,
    fallback: Arc<FallbackStore>,
    mode: DeploymentMode,
}

impl StoreSelector {
    pub fn new(
        durable: Option<Arc<DurableClient>>,
        fallback: Arc<FallbackStore>,
        mode: DeploymentMode,
    ) -> Self {
        Self {
            durable,
            fallback,
            mode,
        }
    }

    /// Probe the primary store with a single bounded connection attempt.
    pub async fn try_connect(&self) -> bool {
        match &self.durable {
            Some(durable) => durable.try_connect().await,
            None => false,
        }
    }

    /// Choose the store for one operation.
    ///
    /// A failed connection attempt is an expected condition, handled here by
    /// selecting the fallback; it never propagates to the caller. In
    /// production the fallback is forbidden, so a primary outage surfaces as
    /// unavailability instead of silent local persistence.
    pub async fn select(&self) -> AppResult<ActiveStore> {
        if let Some(durable) = &self.durable {
            if durable.try_connect().await {
                return Ok(ActiveStore::Durable(durable.clone()));
            }
        }

        if self.mode.is_production() {
            tracing::error!(
                "primary store unreachable and the fallback store is disabled in production"
            );
            return Err(AppError::Unavailable);
        }

        tracing::debug!("primary store unreachable; serving from local fallback store");
        Ok(ActiveStore::Fallback(self.fallback.clone()))
    }

    pub fn mode(&self) -> DeploymentMode {
        self.mode
    }
}
