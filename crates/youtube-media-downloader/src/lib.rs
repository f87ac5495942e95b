//! YouTube Media Downloader Client
//!
//! Lists the videos of a YouTube channel through the RapidAPI
//! `youtube-media-downloader` service.
//!
//! # Example
//!
//! ```no_run
//! use youtube_media_downloader::{ChannelVideosClient, ChannelVideosRequest, ClientOption, RateLimiter};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ChannelVideosClient::new(
//!         "my-rapidapi-key",
//!         [ClientOption::rate_limit(RateLimiter::new(1, Duration::from_secs(1)))],
//!     )?;
//!
//!     let request = ChannelVideosRequest::default().with_lang("de");
//!     let videos = client.get_channel_videos("UCuAXFkgsw1L7xaCfnd5JJOw", request).await?;
//!     println!("Found {} videos", videos.len());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod types;

pub use client::{ChannelVideosClient, DEFAULT_HOST};
pub use types::{ChannelVideosRequest, ContentType, VideoSummary};

// Re-export the shared client plumbing
pub use rapidapi_core::{ClientOption, RapidApiError, RateLimiter, Result, Thumbnail};
