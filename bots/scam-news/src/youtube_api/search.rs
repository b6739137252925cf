//! YouTube Search API types and result selection.

use crate::error::{Error, Result};
use crate::youtube_api::types::{PageInfo, ResourceId};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::num::NonZeroU32;

/// Canonical watch page for a video; the id is appended verbatim.
pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Response structure for the `search.list` API call.
///
/// `items` is ordered according to the request's `order` parameter, so with
/// `order=date` the first item is the most recently published match.
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list>
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#searchListResponse`.
    #[serde(default)]
    pub kind: String,
    /// The search results; absent or `null` when nothing matched.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: VecDeque<SearchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single search result.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: ResourceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<SearchResultSnippet>,
}

/// Basic details about a search result.
///
/// Titles arrive HTML-escaped (`&amp;`, `&#39;`) and are kept that way.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#snippet>
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultSnippet {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub description: String,
}

/// Duration classes understood by the `videoDuration` search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VideoDuration {
    /// Shorter than four minutes.
    Short,
    /// Between four and twenty minutes.
    Medium,
    /// Longer than twenty minutes.
    Long,
}

impl VideoDuration {
    pub fn as_str(self) -> &'static str {
        match self {
            VideoDuration::Short => "short",
            VideoDuration::Medium => "medium",
            VideoDuration::Long => "long",
        }
    }
}

/// What to search for and how to shape the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    topic_query: String,
    result_count: NonZeroU32,
    duration: VideoDuration,
    region_code: String,
    relevance_language: String,
}

impl Default for SearchCriteria {
    /// The newest short Taiwanese scam-news video.
    fn default() -> Self {
        Self::new("詐騙 新聞", NonZeroU32::MIN)
    }
}

impl SearchCriteria {
    pub fn new(topic_query: impl Into<String>, result_count: NonZeroU32) -> Self {
        Self {
            topic_query: topic_query.into(),
            result_count,
            duration: VideoDuration::Short,
            region_code: "TW".to_string(),
            relevance_language: "zh-TW".to_string(),
        }
    }

    pub fn topic_query(&self) -> &str {
        &self.topic_query
    }

    pub fn result_count(&self) -> u32 {
        self.result_count.get()
    }

    pub fn duration(&self) -> VideoDuration {
        self.duration
    }

    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    pub fn relevance_language(&self) -> &str {
        &self.relevance_language
    }
}

/// The video picked from a search, ready to be announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCandidate {
    pub video_id: String,
    pub title: String,
    pub watch_url: String,
}

impl VideoCandidate {
    fn new(video_id: String, title: String) -> Self {
        Self {
            watch_url: format!("{WATCH_URL_PREFIX}{video_id}"),
            video_id,
            title,
        }
    }
}

impl SearchListResponse {
    /// Picks the top-ranked result.
    ///
    /// Returns `Ok(None)` when nothing matched. Lower-ranked items are never
    /// considered, even when the first one is unusable.
    pub fn into_latest_candidate(mut self) -> Result<Option<VideoCandidate>> {
        let Some(first) = self.items.pop_front() else {
            return Ok(None);
        };

        let video_id = first
            .id
            .video_id
            .filter(|id| !id.is_empty())
            .ok_or(Error::MalformedSearchResult {
                reason: "first item has no video id",
            })?;
        let title = first
            .snippet
            .map(|snippet| snippet.title)
            .filter(|title| !title.is_empty())
            .ok_or(Error::MalformedSearchResult {
                reason: "first item has no title",
            })?;

        Ok(Some(VideoCandidate::new(video_id, title)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> SearchListResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn picks_first_item_only() {
        let response = parse(
            r#"{
                "kind": "youtube#searchListResponse",
                "pageInfo": { "totalResults": 2, "resultsPerPage": 2 },
                "items": [
                    {
                        "id": { "kind": "youtube#video", "videoId": "newest" },
                        "snippet": {
                            "title": "最新",
                            "publishedAt": "2026-10-13T08:00:00Z",
                            "channelTitle": "新聞台"
                        }
                    },
                    {
                        "id": { "kind": "youtube#video", "videoId": "older" },
                        "snippet": { "title": "較舊" }
                    }
                ]
            }"#,
        );
        assert_eq!(response.items[0].snippet.as_ref().unwrap().channel_title, "新聞台");

        let candidate = response.into_latest_candidate().unwrap().unwrap();
        assert_eq!(
            candidate,
            VideoCandidate {
                video_id: "newest".into(),
                title: "最新".into(),
                watch_url: "https://www.youtube.com/watch?v=newest".into(),
            }
        );
    }

    #[test]
    fn empty_or_missing_items_is_no_result() {
        let response = parse(r#"{ "kind": "youtube#searchListResponse", "items": [] }"#);
        assert_eq!(response.into_latest_candidate().unwrap(), None);

        let response = parse(r#"{ "kind": "youtube#searchListResponse" }"#);
        assert_eq!(response.into_latest_candidate().unwrap(), None);

        let response = parse(r#"{ "kind": "youtube#searchListResponse", "items": null }"#);
        assert_eq!(response.into_latest_candidate().unwrap(), None);
    }

    #[test]
    fn first_item_without_video_id_is_malformed() {
        let response = parse(
            r#"{
                "items": [
                    { "id": { "kind": "youtube#channel", "channelId": "UC1" }, "snippet": { "title": "c" } },
                    { "id": { "kind": "youtube#video", "videoId": "v" }, "snippet": { "title": "v" } }
                ]
            }"#,
        );
        assert!(matches!(
            response.into_latest_candidate(),
            Err(Error::MalformedSearchResult { .. })
        ));
    }

    #[test]
    fn html_escaping_in_titles_is_preserved() {
        let response = parse(
            r#"{ "items": [ { "id": { "kind": "youtube#video", "videoId": "x" }, "snippet": { "title": "A &amp; B" } } ] }"#,
        );
        let candidate = response.into_latest_candidate().unwrap().unwrap();
        assert_eq!(candidate.title, "A &amp; B");
    }

    #[test]
    fn default_criteria() {
        let criteria = SearchCriteria::default();
        assert_eq!(criteria.topic_query(), "詐騙 新聞");
        assert_eq!(criteria.result_count(), 1);
        assert_eq!(criteria.duration(), VideoDuration::Short);
        assert_eq!(criteria.region_code(), "TW");
        assert_eq!(criteria.relevance_language(), "zh-TW");
    }
}
