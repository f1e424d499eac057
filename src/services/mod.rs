//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! the preference store, the channel sender, and the handlers.

pub mod dispatch;
mod user_service;

pub use dispatch::DispatchService;
pub use user_service::UserService;

use std::sync::Arc;

use crate::services::dispatch::ChannelSender;
use crate::store::PreferenceStore;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since the store and sender are shared via `Arc`.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub dispatch: DispatchService,
}

impl Services {
    /// Creates a new Services instance over a store and a channel sender.
    pub fn new(store: PreferenceStore, sender: Arc<dyn ChannelSender>) -> Self {
        Self {
            users: UserService::new(store.clone()),
            dispatch: DispatchService::new(store, sender),
        }
    }
}
