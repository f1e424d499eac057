//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use std::sync::Arc;

use crate::config::AuthConfig;
use crate::services::Services;
use crate::services::dispatch::ChannelSender;
use crate::store::PreferenceStore;

/// Application state containing all shared services and resources.
///
/// Designed to be used with Axum's State extractor. Cloning is cheap since
/// the store and sender are shared via `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Static bearer-token configuration for the auth middleware
    pub auth: AuthConfig,
}

impl AppState {
    /// Creates a new AppState from a preference store, a channel sender,
    /// and the auth configuration.
    ///
    /// The store is constructed (and seeded) by the process entry point and
    /// injected here; there is no ambient global store.
    pub fn new(store: PreferenceStore, sender: Arc<dyn ChannelSender>, auth: AuthConfig) -> Self {
        Self {
            services: Services::new(store, sender),
            auth,
        }
    }
}
