//! Turns a selected video into the text pushed to every group.

use crate::youtube_api::VideoCandidate;

const HEADER: &str = "📢 今日詐騙新聞";
const LINK_MARKER: &str = "🔗";

/// The message body sent to every destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    body: String,
}

impl Announcement {
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Renders the fixed announcement template.
///
/// Header, blank line, title, blank line, link line. Downstream readers rely
/// on this exact layout, so it is not configurable.
pub fn format_announcement(video: &VideoCandidate) -> Announcement {
    Announcement {
        body: format!(
            "{HEADER}\n\n{}\n\n{LINK_MARKER} {}",
            video.title, video.watch_url
        ),
    }
}
