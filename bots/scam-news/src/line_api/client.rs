//! Authenticated LINE Messaging API client.

use crate::error::{Error, Result, Service};
use crate::line_api::types::{Message, PushMessageRequest, PushMessageResponse};
use tracing::instrument;

/// Client bound to one channel access token.
///
/// Constructed once per run and shared by reference; nothing in it changes
/// after construction.
#[derive(Clone)]
pub struct LineClient {
    channel_access_token: String,
    /// Base URL that endpoint paths are appended to, without a trailing slash.
    api_base: String,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl std::fmt::Debug for LineClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl LineClient {
    pub fn new(
        channel_access_token: impl Into<String>,
        api_base: &str,
        client: reqwest::Client,
    ) -> Self {
        Self {
            channel_access_token: channel_access_token.into(),
            api_base: api_base.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Pushes `messages` to a single user, group or room.
    ///
    /// Any non-success status becomes [`Error::PushUpstream`] naming the
    /// destination and carrying the response body. A success status means the
    /// push was accepted, even if the response body is not what we expect.
    ///
    /// # API Reference
    ///
    /// <https://developers.line.biz/en/reference/messaging-api/#send-push-message>
    #[instrument(skip(self, messages), level = tracing::Level::DEBUG)]
    pub async fn push_message(
        &self,
        to: &str,
        messages: Vec<Message<'_>>,
    ) -> Result<PushMessageResponse> {
        let url = format!("{}/v2/bot/message/push", self.api_base);
        let body = PushMessageRequest { to, messages };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.channel_access_token)
            .json(&body)
            .send()
            .await
            .map_err(|source| Error::Transport {
                service: Service::Line,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(Error::PushUpstream {
                destination: to.to_string(),
                status,
                body,
            });
        }

        let sent = response
            .json::<PushMessageResponse>()
            .await
            .unwrap_or_else(|e| {
                tracing::trace!(error = %e, "ignoring undecodable push response body");
                PushMessageResponse::default()
            });
        tracing::trace!(sent = sent.sent_messages.len(), "push accepted");
        Ok(sent)
    }
}
