//! LINE Messaging API push message types.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v2/bot/message/push`.
///
/// See: <https://developers.line.biz/en/reference/messaging-api/#send-push-message>
#[derive(Debug, Serialize)]
pub struct PushMessageRequest<'a> {
    /// ID of the target recipient: a user, group or room ID.
    pub to: &'a str,
    /// Between one and five messages, delivered in order.
    pub messages: Vec<Message<'a>>,
}

/// A message object.
///
/// Only plain text is modelled.
///
/// See: <https://developers.line.biz/en/reference/messaging-api/#message-objects>
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Message<'a> {
    Text { text: &'a str },
}

/// Response body of a successful push.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushMessageResponse {
    #[serde(default)]
    pub sent_messages: Vec<SentMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentMessage {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_token: Option<String>,
}
