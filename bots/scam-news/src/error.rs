//! Error type shared by every stage of a relay run.

use crate::broadcast::DeliveryOutcome;
use http::StatusCode;
use thiserror::Error;

/// Which remote API a request was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    YouTube,
    Line,
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Service::YouTube => f.write_str("YouTube API"),
            Service::Line => f.write_str("LINE Messaging API"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// A required credential or list was not provided.
    #[error("{setting} is not set")]
    Configuration { setting: &'static str },

    #[error("{setting} has unsupported value {value:?}")]
    InvalidSetting { setting: &'static str, value: String },

    #[error("YouTube API error: {status} - {body}")]
    SearchUpstream { status: StatusCode, body: String },

    #[error("LINE push to {destination} failed with status {status}: {body}")]
    PushUpstream {
        destination: String,
        status: StatusCode,
        body: String,
    },

    /// Only produced under [`crate::BroadcastPolicy::AttemptAll`].
    #[error(
        "{} of {} LINE pushes failed",
        .outcomes.iter().filter(|o| !o.is_delivered()).count(),
        .outcomes.len()
    )]
    PartialDelivery { outcomes: Vec<DeliveryOutcome> },

    #[error("malformed search result: {reason}")]
    MalformedSearchResult { reason: &'static str },

    #[error("send request to {service}")]
    Transport {
        service: Service,
        #[source]
        source: reqwest::Error,
    },

    #[error("decode {service} response")]
    Decode {
        service: Service,
        #[source]
        source: reqwest::Error,
    },
}

impl Error {
    /// True for non-success responses from either remote API.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Error::SearchUpstream { .. } | Error::PushUpstream { .. } | Error::PartialDelivery { .. }
        )
    }

    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Configuration { .. } | Error::InvalidSetting { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
