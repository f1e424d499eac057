//! Dispatch engine: fan-out across enabled channels, fan-in to one result.

use std::sync::Arc;

use tokio::task::JoinHandle;

use super::sender::{Channel, ChannelOutcome, ChannelSender};
use crate::error::{AppError, AppResult};
use crate::store::PreferenceStore;

/// A request to deliver one message to one user.
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    pub user_id: i32,
    /// May be empty; no length constraint is imposed here.
    pub message: String,
}

/// Aggregate result of a dispatch across all issued channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    /// True iff at least one issued channel succeeded
    pub success: bool,
    /// Human-readable summary covering every issued channel
    pub message: String,
    pub user_id: i32,
}

/// Translates a dispatch request into zero or more channel sends and reduces
/// their outcomes.
///
/// Each call is stateless: no in-flight state is persisted and there is no
/// retry loop. When more than one channel is enabled the sends run as
/// concurrent tasks joined before the result is produced, so total latency
/// tracks the slowest channel rather than the sum.
#[derive(Clone)]
pub struct DispatchService {
    store: PreferenceStore,
    sender: Arc<dyn ChannelSender>,
}

impl DispatchService {
    /// Creates a new DispatchService over the given store and channel sender.
    pub fn new(store: PreferenceStore, sender: Arc<dyn ChannelSender>) -> Self {
        Self { store, sender }
    }

    /// Dispatches `request.message` to every channel the user has enabled.
    ///
    /// # Returns
    /// The reduced `DispatchResult`, or `NotFound` when the user id does not
    /// exist. A user with every channel disabled yields a `success = false`
    /// result without any external call; that is a defined fast path, not an
    /// error. Channel-level transport failures never surface as errors here.
    pub async fn send(&self, request: DispatchRequest) -> AppResult<DispatchResult> {
        let user = self
            .store
            .get_by_id(request.user_id)
            .ok_or_else(|| AppError::NotFound {
                entity: "user".to_string(),
                field: "id".to_string(),
                value: request.user_id.to_string(),
            })?;

        if user.preferences.all_disabled() {
            tracing::info!(user_id = user.id, "All notification channels disabled");
            return Ok(DispatchResult {
                success: false,
                message: "User has disabled all notification preferences".to_string(),
                user_id: request.user_id,
            });
        }

        let mut tasks: Vec<(Channel, JoinHandle<ChannelOutcome>)> = Vec::new();

        if user.preferences.email {
            let sender = Arc::clone(&self.sender);
            let address = user.email.clone();
            let message = request.message.clone();
            tasks.push((
                Channel::Email,
                tokio::spawn(async move { sender.send_email(&address, &message).await }),
            ));
        }

        if user.preferences.sms {
            let sender = Arc::clone(&self.sender);
            let phone = user.phone.clone();
            let message = request.message.clone();
            tasks.push((
                Channel::Sms,
                tokio::spawn(async move { sender.send_sms(&phone, &message).await }),
            ));
        }

        // Join every task before producing the aggregate; a panicked task
        // becomes a failed outcome for its channel only.
        let (channels, handles): (Vec<_>, Vec<_>) = tasks.into_iter().unzip();
        let outcomes: Vec<ChannelOutcome> = futures::future::join_all(handles)
            .await
            .into_iter()
            .zip(channels)
            .map(|(joined, channel)| match joined {
                Ok(outcome) => outcome,
                Err(join_error) => {
                    ChannelOutcome::failure(channel, format!("Task failed: {}", join_error))
                }
            })
            .collect();

        let result = reduce_outcomes(&outcomes, request.user_id);
        tracing::info!(
            user_id = result.user_id,
            success = result.success,
            channels = outcomes.len(),
            "Dispatch completed"
        );
        Ok(result)
    }
}

/// Reduces per-channel outcomes into the aggregate result: success is the OR
/// over issued channels, and the message reports every issued channel's
/// status.
fn reduce_outcomes(outcomes: &[ChannelOutcome], user_id: i32) -> DispatchResult {
    if outcomes.is_empty() {
        return DispatchResult {
            success: false,
            message: "No notifications sent".to_string(),
            user_id,
        };
    }

    let mut successes = Vec::new();
    let mut failures = Vec::new();

    for outcome in outcomes {
        if outcome.success {
            successes.push(format!("{} sent successfully", outcome.channel.label()));
        } else {
            failures.push(format!(
                "{} failed: {}",
                outcome.channel.label(),
                outcome.detail
            ));
        }
    }

    let success = !successes.is_empty();
    let message = if success {
        if failures.is_empty() {
            successes.join("; ")
        } else {
            format!("{}. {}", successes.join("; "), failures.join("; "))
        }
    } else {
        format!("Failed to send notification: {}", failures.join("; "))
    };

    DispatchResult {
        success,
        message,
        user_id,
    }
}
