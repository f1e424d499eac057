//! Channel sender abstraction.
//!
//! The dispatch engine talks to the external delivery service only through
//! this trait, which keeps transport failures contained: a send attempt
//! always yields a `ChannelOutcome`, never an error.

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

/// A notification delivery medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Sms,
}

impl Channel {
    /// Human-readable label used in aggregate result messages.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::Sms => "SMS",
        }
    }
}

/// The result of a single channel's send attempt.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChannelOutcome {
    /// Which channel was attempted
    pub channel: Channel,
    /// Whether the attempt succeeded
    pub success: bool,
    /// Human-readable success or error description
    pub detail: String,
}

impl ChannelOutcome {
    pub fn success(channel: Channel, detail: impl Into<String>) -> Self {
        Self {
            channel,
            success: true,
            detail: detail.into(),
        }
    }

    pub fn failure(channel: Channel, detail: impl Into<String>) -> Self {
        Self {
            channel,
            success: false,
            detail: detail.into(),
        }
    }
}

/// Trait for sending a message over one concrete channel.
///
/// Uses `async_trait` to support async methods with dynamic dispatch; all
/// implementations must be `Send + Sync` for use across spawned tasks.
/// Implementations absorb transport problems (timeouts, connection failures,
/// unexpected errors) into a failed outcome rather than returning an error,
/// so one channel's trouble can never abort another channel's attempt.
#[async_trait]
pub trait ChannelSender: Send + Sync {
    /// Sends `message` to the given email address.
    async fn send_email(&self, address: &str, message: &str) -> ChannelOutcome;

    /// Sends `message` to the given phone number.
    async fn send_sms(&self, phone: &str, message: &str) -> ChannelOutcome;
}
