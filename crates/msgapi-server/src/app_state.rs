//! Shared application state for the Message API.
//!
//! The store and the metrics collector are built once at startup and handed
//! to every handler through axum's `State`; there are no globals, so each test
//! can build its own isolated state.

use std::sync::Arc;

use msgapi_core::{MessageStore, MetricsCollector};

use crate::config::ServiceConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    store: Arc<MessageStore>,
    metrics: Arc<MetricsCollector>,
}

impl AppState {
    /// Build state with fresh, empty components.
    pub fn new(cfg: ServiceConfig) -> Self {
        Self::with_parts(
            cfg,
            Arc::new(MessageStore::new()),
            Arc::new(MetricsCollector::new()),
        )
    }

    /// Build state around existing components (tests keep a handle to them).
    pub fn with_parts(
        cfg: ServiceConfig,
        store: Arc<MessageStore>,
        metrics: Arc<MetricsCollector>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, store, metrics }),
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &MessageStore {
        &self.inner.store
    }

    pub fn metrics(&self) -> &MetricsCollector {
        &self.inner.metrics
    }

    /// Count one handled request; 2xx is a success.
    pub fn record_request(&self, method: &str, status: u16) {
        self.inner
            .metrics
            .record_request(method, status, (200..300).contains(&status));
    }
}
