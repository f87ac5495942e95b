//! Data types for the channel videos endpoint

use std::fmt;

use rapidapi_core::Thumbnail;
use serde::{Deserialize, Serialize};

/// Which tab of a channel to list
///
/// The service exposes videos, shorts and live streams separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Regular uploads
    #[default]
    Videos,
    /// Shorts
    Shorts,
    /// Live streams and past broadcasts
    Live,
}

impl ContentType {
    /// Wire name of the content type
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Videos => "videos",
            ContentType::Shorts => "shorts",
            ContentType::Live => "live",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call options for [`crate::ChannelVideosClient::get_channel_videos`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelVideosRequest {
    lang: Option<String>,
    content_type: Option<ContentType>,
}

impl ChannelVideosRequest {
    /// Default language when none (or an empty one) is set
    pub const DEFAULT_LANG: &'static str = "en";

    /// Set the language of titles and texts (e.g. `"de"`)
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Set which tab of the channel to list
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Effective language, `"en"` unless a non-empty one was set
    pub fn lang(&self) -> &str {
        match self.lang.as_deref() {
            Some(lang) if !lang.is_empty() => lang,
            _ => Self::DEFAULT_LANG,
        }
    }

    /// Effective content type, [`ContentType::Videos`] unless set
    pub fn content_type(&self) -> ContentType {
        self.content_type.unwrap_or_default()
    }
}

/// A video as listed on a channel
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoSummary {
    /// Item kind reported by the service (e.g. `"video"`)
    #[serde(rename = "type")]
    pub kind: String,
    /// YouTube video ID
    pub id: String,
    /// Video title
    pub title: String,
    /// Whether the video is a live stream that is on air right now
    pub is_live_now: bool,
    /// Human-readable duration (e.g. `"12:34"`)
    pub length_text: String,
    /// Human-readable view count (e.g. `"1.2M views"`)
    pub view_count_text: String,
    /// Human-readable publish time (e.g. `"3 days ago"`)
    pub published_time_text: String,
    /// Thumbnails, in the order the service returns them
    pub thumbnails: Vec<Thumbnail>,
}

/// Body of a channel videos response
///
/// Only `items` reaches callers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ChannelVideosResponse {
    #[allow(dead_code)]
    pub status: bool,
    #[allow(dead_code)]
    pub next_token: String,
    pub items: Vec<VideoSummary>,
}
