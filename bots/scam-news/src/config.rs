//! Run configuration, resolved once at process start.
//!
//! Nothing else in the crate reads the environment: the binary calls
//! [`Config::from_env`] and hands the resulting value to [`crate::run`].

use crate::broadcast::{BroadcastPolicy, DestinationId};
use crate::error::{Error, Result};
use crate::youtube_api::SearchCriteria;

pub const YOUTUBE_API_KEY: &str = "YOUTUBE_API_KEY";
pub const YOUTUBE_API_BASE_URL: &str = "YOUTUBE_API_BASE_URL";
pub const LINE_CHANNEL_ACCESS_TOKEN: &str = "LINE_CHANNEL_ACCESS_TOKEN";
pub const LINE_GROUP_IDS: &str = "LINE_GROUP_IDS";
pub const LINE_BROADCAST_POLICY: &str = "LINE_BROADCAST_POLICY";
pub const LINE_API_BASE_URL: &str = "LINE_API_BASE_URL";

pub const DEFAULT_YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_LINE_API_BASE: &str = "https://api.line.me";

#[derive(Debug, Clone)]
pub struct Config {
    pub youtube: YouTubeConfig,
    pub line: LineConfig,
}

#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    /// Checked when the search is issued, not here.
    pub api_key: Option<String>,
    pub api_base: String,
    pub criteria: SearchCriteria,
}

#[derive(Debug, Clone)]
pub struct LineConfig {
    /// Checked when the broadcast starts, not here.
    pub channel_access_token: Option<String>,
    pub group_ids: Vec<DestinationId>,
    pub api_base: String,
    pub policy: BroadcastPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty credential and policy values count as unset. A missing group
    /// list is an empty list; a present one is split on `,` with each entry
    /// trimmed and empty entries kept in place.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let policy = match non_empty(LINE_BROADCAST_POLICY) {
            Some(v) => v.parse::<BroadcastPolicy>().map_err(|()| Error::InvalidSetting {
                setting: LINE_BROADCAST_POLICY,
                value: v,
            })?,
            None => BroadcastPolicy::default(),
        };

        Ok(Self {
            youtube: YouTubeConfig {
                api_key: non_empty(YOUTUBE_API_KEY),
                api_base: non_empty(YOUTUBE_API_BASE_URL)
                    .unwrap_or_else(|| DEFAULT_YOUTUBE_API_BASE.to_string()),
                criteria: SearchCriteria::default(),
            },
            line: LineConfig {
                channel_access_token: non_empty(LINE_CHANNEL_ACCESS_TOKEN),
                group_ids: lookup(LINE_GROUP_IDS)
                    .map(|ids| parse_group_ids(&ids))
                    .unwrap_or_default(),
                api_base: non_empty(LINE_API_BASE_URL)
                    .unwrap_or_else(|| DEFAULT_LINE_API_BASE.to_string()),
                policy,
            },
        })
    }
}

fn parse_group_ids(raw: &str) -> Vec<DestinationId> {
    raw.split(',').map(|id| DestinationId::new(id.trim())).collect()
}
