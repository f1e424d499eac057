//! HTTP implementation of the channel sender.
//!
//! Forwards messages to the external delivery service as JSON POSTs using
//! the shared HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value as JsonValue, json};

use super::sender::{Channel, ChannelOutcome, ChannelSender};
use crate::external::client::HTTP_CLIENT;

/// Channel sender backed by the external delivery service's HTTP API.
///
/// Each channel maps to a fixed path under the configured base URL:
/// `/send-email` and `/send-sms`. Every call carries its own timeout; a
/// timed-out or unreachable call resolves to a failed outcome for that
/// channel only.
#[derive(Debug, Clone)]
pub struct HttpChannelSender {
    base_url: String,
    timeout: Duration,
}

impl HttpChannelSender {
    /// Creates a sender targeting `base_url` with a fixed per-call timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    async fn post(&self, endpoint: &str, payload: JsonValue, channel: Channel) -> ChannelOutcome {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = HTTP_CLIENT
            .post(&url)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await;

        match response {
            Ok(response) if response.status() == StatusCode::OK => {
                let detail = match response.json::<JsonValue>().await {
                    Ok(body) => body.to_string(),
                    Err(_) => "Response received but could not parse JSON".to_string(),
                };
                ChannelOutcome::success(channel, detail)
            }
            Ok(response) => {
                let status = response.status();
                let detail = extract_error_detail(response, status).await;
                tracing::warn!(
                    channel = channel.label(),
                    status = status.as_u16(),
                    detail = %detail,
                    "Channel send rejected by delivery service"
                );
                ChannelOutcome::failure(channel, detail)
            }
            Err(error) => {
                let detail = describe_transport_error(&error);
                tracing::warn!(
                    channel = channel.label(),
                    error = %error,
                    "Channel send failed at transport level"
                );
                ChannelOutcome::failure(channel, detail)
            }
        }
    }
}

/// Pulls the `error` field out of a JSON error body, falling back to a
/// generic HTTP status description.
async fn extract_error_detail(response: reqwest::Response, status: StatusCode) -> String {
    match response.json::<JsonValue>().await {
        Ok(body) => body
            .get("error")
            .and_then(JsonValue::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
        Err(_) => format!("HTTP {}", status.as_u16()),
    }
}

fn describe_transport_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "Request timeout - external service not responding".to_string()
    } else if error.is_connect() {
        "Connection failed - external service unavailable".to_string()
    } else {
        format!("Unexpected error: {}", error)
    }
}

#[async_trait]
impl ChannelSender for HttpChannelSender {
    async fn send_email(&self, address: &str, message: &str) -> ChannelOutcome {
        let payload = json!({ "email": address, "message": message });
        self.post("send-email", payload, Channel::Email).await
    }

    async fn send_sms(&self, phone: &str, message: &str) -> ChannelOutcome {
        // The delivery service's wire contract names this field "telephone"
        let payload = json!({ "telephone": phone, "message": message });
        self.post("send-sms", payload, Channel::Sms).await
    }
}
