//! Notification dispatch: channel sender abstraction and the fan-out engine.

mod dispatch_service;
mod http_sender;
mod sender;

pub use dispatch_service::{DispatchRequest, DispatchResult, DispatchService};
pub use http_sender::HttpChannelSender;
pub use sender::{Channel, ChannelOutcome, ChannelSender};
