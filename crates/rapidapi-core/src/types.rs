//! Data types shared by the RapidAPI YouTube services

use serde::{Deserialize, Serialize};

/// Thumbnail image attached to a video or transcript
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnail {
    /// Image URL
    pub url: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Whether this is an animated preview; only the media downloader
    /// service reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moving: Option<bool>,
}
