//! Sequential delivery of one announcement to every configured group.

use crate::announcement::Announcement;
use crate::config::{LINE_CHANNEL_ACCESS_TOKEN, LINE_GROUP_IDS, LineConfig};
use crate::error::{Error, Result};
use crate::line_api::{LineClient, Message};
use std::future::Future;
use std::str::FromStr;

/// Opaque identifier of one push recipient, as issued by LINE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DestinationId(String);

impl DestinationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DestinationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for DestinationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What to do with the remaining destinations once one push fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BroadcastPolicy {
    /// Stop at the first failure and report it. Earlier destinations keep
    /// the message they already received.
    #[default]
    AbortOnFirstFailure,
    /// Try every destination, then report all outcomes if any failed.
    AttemptAll,
}

impl FromStr for BroadcastPolicy {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "abort" => Ok(BroadcastPolicy::AbortOnFirstFailure),
            "attempt-all" => Ok(BroadcastPolicy::AttemptAll),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered { destination: DestinationId },
    Failed { destination: DestinationId, reason: String },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }

    pub fn destination(&self) -> &DestinationId {
        match self {
            DeliveryOutcome::Delivered { destination }
            | DeliveryOutcome::Failed { destination, .. } => destination,
        }
    }
}

/// Something that can push one text message to one destination.
pub trait PushChannel {
    fn push_text(
        &self,
        destination: &DestinationId,
        text: &str,
    ) -> impl Future<Output = Result<()>> + Send;
}

impl PushChannel for LineClient {
    async fn push_text(&self, destination: &DestinationId, text: &str) -> Result<()> {
        self.push_message(destination.as_str(), vec![Message::Text { text }])
            .await
            .map(|_| ())
    }
}

/// Pushes `announcement` to each destination in order, one at a time.
///
/// Under [`BroadcastPolicy::AbortOnFirstFailure`] the first error is returned
/// as-is and no later destination is attempted. Under
/// [`BroadcastPolicy::AttemptAll`] every destination is tried and any failure
/// turns the whole result into [`Error::PartialDelivery`].
pub async fn deliver<C>(
    channel: &C,
    announcement: &Announcement,
    destinations: &[DestinationId],
    policy: BroadcastPolicy,
) -> Result<Vec<DeliveryOutcome>>
where
    C: PushChannel,
{
    let mut outcomes = Vec::with_capacity(destinations.len());
    for destination in destinations {
        tracing::info!(%destination, "pushing message to LINE group");
        match channel.push_text(destination, announcement.body()).await {
            Ok(()) => {
                tracing::info!(%destination, "message sent");
                outcomes.push(DeliveryOutcome::Delivered {
                    destination: destination.clone(),
                });
            }
            Err(e) if policy == BroadcastPolicy::AbortOnFirstFailure => return Err(e),
            Err(e) => {
                tracing::warn!(
                    %destination,
                    error = %e,
                    "push failed, continuing with remaining groups"
                );
                outcomes.push(DeliveryOutcome::Failed {
                    destination: destination.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    if outcomes.iter().any(|o| !o.is_delivered()) {
        return Err(Error::PartialDelivery { outcomes });
    }
    Ok(outcomes)
}

/// Broadcasts `announcement` to every configured LINE group.
///
/// Fails with [`Error::Configuration`] before any request if the access token
/// or the group list is missing.
pub async fn broadcast(
    config: &LineConfig,
    announcement: &Announcement,
) -> Result<Vec<DeliveryOutcome>> {
    let token = config
        .channel_access_token
        .as_deref()
        .ok_or(Error::Configuration {
            setting: LINE_CHANNEL_ACCESS_TOKEN,
        })?;
    if config.group_ids.is_empty() {
        return Err(Error::Configuration {
            setting: LINE_GROUP_IDS,
        });
    }

    let client = LineClient::new(token, &config.api_base, reqwest::Client::new());
    deliver(&client, announcement, &config.group_ids, config.policy).await
}
