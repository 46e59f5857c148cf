//! Metrics tracking.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct Metrics {
    pub access_tokens_issued: AtomicU64,
    pub reset_tokens_issued: AtomicU64,
    pub confirmation_tokens_issued: AtomicU64,
    pub requests_rejected: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            access_tokens_issued: AtomicU64::new(0),
            reset_tokens_issued: AtomicU64::new(0),
            confirmation_tokens_issued: AtomicU64::new(0),
            requests_rejected: AtomicU64::new(0),
        }
    }

    pub fn record_access(&self) {
        self.access_tokens_issued.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_reset(&self) {
        self.reset_tokens_issued.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_confirmation(&self) {
        self.confirmation_tokens_issued.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_reject(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            access_tokens_issued: self.access_tokens_issued.load(Ordering::Relaxed),
            reset_tokens_issued: self.reset_tokens_issued.load(Ordering::Relaxed),
            confirmation_tokens_issued: self.confirmation_tokens_issued.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
        }
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub access_tokens_issued: u64,
    pub reset_tokens_issued: u64,
    pub confirmation_tokens_issued: u64,
    pub requests_rejected: u64,
}
