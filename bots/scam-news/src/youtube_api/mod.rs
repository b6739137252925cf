//! YouTube Data API v3 client library.
//!
//! Only the `search.list` endpoint is covered: the relay asks YouTube for the
//! newest video matching a fixed query and turns the top hit into a
//! [`VideoCandidate`].
//!
//! ```rust,no_run
//! use scam_news_bot::youtube_api::{search_latest_video, SearchCriteria};
//! use scam_news_bot::config::YouTubeConfig;
//!
//! # async fn example() -> Result<(), scam_news_bot::Error> {
//! let config = YouTubeConfig {
//!     api_key: Some("AIza...".to_string()),
//!     api_base: "https://www.googleapis.com/youtube/v3".to_string(),
//!     criteria: SearchCriteria::default(),
//! };
//! if let Some(video) = search_latest_video(&config).await? {
//!     println!("{} -> {}", video.title, video.watch_url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod search;
pub mod types;

pub use client::{YouTubeClient, search_latest_video};
pub use search::{
    SearchCriteria, SearchListResponse, SearchResult, SearchResultSnippet, VideoCandidate,
    VideoDuration, WATCH_URL_PREFIX,
};
pub use types::{PageInfo, ResourceId};
