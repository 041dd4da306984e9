//! Backing-store handle
//!
//! The deployment hands the service a document-store connection string and
//! database name. No endpoint reads from it; the handle exists so the
//! settings are surfaced at startup and released on shutdown.

use crate::config::DatabaseConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone, Debug)]
pub struct BackingStore {
    url: String,
    database: String,
    open: Arc<AtomicBool>,
}

impl BackingStore {
    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self {
            url: config.url.clone(),
            database: config.name.clone(),
            open: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Connection target with any credentials masked.
    pub fn describe(&self) -> String {
        format!("{}/{}", redact_credentials(&self.url), self.database)
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Idempotent; clones share the same open flag.
    pub fn close(&self) {
        if self.open.swap(false, Ordering::SeqCst) {
            info!("Closed backing store handle for {}", self.describe());
        }
    }
}

fn redact_credentials(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };

    match rest.rsplit_once('@') {
        Some((_, host)) => format!("{}://***@{}", scheme, host),
        None => url.to_string(),
    }
}
