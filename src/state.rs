//! Shared application state.

use std::sync::atomic::{AtomicU64, Ordering::Relaxed};
use std::sync::Arc;

use crate::config::SigningConfig;
use crate::telemetry::Metrics;
use crate::token::issue::TokenIssuer;

pub struct AppStateInner {
    pub issuer: TokenIssuer,
    pub metrics: Metrics,
    pub request_count: AtomicU64,
}

pub type AppState = Arc<AppStateInner>;

impl AppStateInner {
    pub fn increment_requests(&self) {
        let n = self.request_count.fetch_add(1, Relaxed) + 1;
        if n % 1000 == 0 {
            tracing::warn!(count = n, "high request volume");
        }
    }
}

pub fn build_state(config: SigningConfig) -> AppState {
    Arc::new(AppStateInner {
        issuer: TokenIssuer::new(config),
        metrics: Metrics::new(),
        request_count: AtomicU64::new(0),
    })
}

#[cfg(test)]
pub fn build_test_state() -> AppState {
    build_state(SigningConfig::with_defaults(b"test_signing_key".to_vec()))
}
