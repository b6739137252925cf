//! Core YouTube API client functionality.

use crate::config::{YOUTUBE_API_KEY, YouTubeConfig};
use crate::error::{Error, Result, Service};
use crate::youtube_api::search::{SearchCriteria, SearchListResponse, VideoCandidate};
use tracing::instrument;

/// Client for the public, key-authenticated parts of the YouTube Data API v3.
///
/// Search does not act on behalf of a user, so an API key is all that is
/// needed. The key is sent as the `key` query parameter on every request.
#[derive(Clone)]
pub struct YouTubeClient {
    api_key: String,
    /// Base URL that endpoint paths are appended to, without a trailing slash.
    api_base: String,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl std::fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl YouTubeClient {
    /// Creates a client from the resolved configuration.
    ///
    /// Fails with [`Error::Configuration`] if no API key was configured.
    pub fn new(config: &YouTubeConfig, client: reqwest::Client) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(Error::Configuration {
            setting: YOUTUBE_API_KEY,
        })?;
        Ok(Self {
            api_key,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Makes a GET request to the YouTube API with common error handling.
    ///
    /// Appends the API key to the given query parameters and turns any
    /// non-success status into [`Error::SearchUpstream`] carrying the
    /// response body.
    ///
    /// # Returns
    ///
    /// The raw [`reqwest::Response`] for method-specific JSON parsing.
    #[instrument(skip(self, query_params), level = tracing::Level::TRACE)]
    async fn make_request(
        &self,
        path: &str,
        query_params: &[(&str, &str)],
    ) -> Result<reqwest::Response> {
        let url = format!("{}/{}", self.api_base, path);

        let response = self
            .client
            .get(&url)
            .query(query_params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| Error::Transport {
                service: Service::YouTube,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(Error::SearchUpstream { status, body });
        }

        Ok(response)
    }

    /// Finds the most recently published video matching `criteria`.
    ///
    /// Uses the `search.list` API ordered by date, so the first result is the
    /// newest. Issues exactly one request.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(video))` - The top-ranked video
    /// * `Ok(None)` - Nothing matched
    /// * `Err(_)` - The request failed or the response was unusable
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self, criteria), fields(query = %criteria.topic_query()))]
    pub async fn search_latest_video(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Option<VideoCandidate>> {
        let max_results = criteria.result_count().to_string();
        let query_params = [
            ("part", "snippet"),
            ("q", criteria.topic_query()),
            ("type", "video"),
            ("order", "date"),
            ("maxResults", &max_results),
            ("regionCode", criteria.region_code()),
            ("relevanceLanguage", criteria.relevance_language()),
            ("videoDuration", criteria.duration().as_str()),
        ];

        tracing::info!(query = %criteria.topic_query(), "searching YouTube");

        let response: SearchListResponse = self
            .make_request("search", &query_params)
            .await?
            .json()
            .await
            .map_err(|source| Error::Decode {
                service: Service::YouTube,
                source,
            })?;

        tracing::debug!(
            results = response.items.len(),
            total = response.page_info.as_ref().map(|p| p.total_results),
            "search response received"
        );

        let candidate = response.into_latest_candidate()?;
        match &candidate {
            Some(video) => {
                tracing::info!(title = %video.title, url = %video.watch_url, "found video");
            }
            None => tracing::info!("no videos found"),
        }
        Ok(candidate)
    }
}

/// Searches for the newest matching video using the configured key and criteria.
pub async fn search_latest_video(config: &YouTubeConfig) -> Result<Option<VideoCandidate>> {
    let client = YouTubeClient::new(config, reqwest::Client::new())?;
    client.search_latest_video(&config.criteria).await
}
