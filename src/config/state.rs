// Application state module
// Manages runtime state shared across connections

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;

use super::types::Config;
use crate::handler::RouteTable;

/// Application state
///
/// Owned behind an `Arc` by the accept loop and every connection task.
/// Nothing here is mutated per request, so handlers need no locking.
pub struct AppState {
    pub config: Config,
    /// Route table constructed once at startup
    pub routes: RouteTable,
    /// Signals the accept loop to stop accepting and return
    pub shutdown_signal: Notify,

    // Cached config value for fast access without locks
    cached_access_log: AtomicBool,
}

impl AppState {
    /// Create `AppState` with the default route table
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            routes: RouteTable::with_default_routes(),
            shutdown_signal: Notify::new(),
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }

    /// Whether access logging is enabled (lock-free)
    pub fn access_log_enabled(&self) -> bool {
        self.cached_access_log.load(Ordering::Relaxed)
    }
}
