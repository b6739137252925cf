//! LINE Messaging API client library.
//!
//! Covers the push endpoint only, with plain text messages.

pub mod client;
pub mod types;

pub use client::LineClient;
pub use types::{Message, PushMessageRequest, PushMessageResponse, SentMessage};
