//! YouTube Transcriptor Client
//!
//! Fetches the transcript of a YouTube video, along with its title,
//! description and thumbnails, through the RapidAPI `youtube-transcriptor`
//! service.
//!
//! # Example
//!
//! ```no_run
//! use youtube_transcriptor::{TranscriptClient, TranscriptRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TranscriptClient::new("my-rapidapi-key", [])?;
//!     let transcript = client.get_transcript("dQw4w9WgXcQ", TranscriptRequest::default()).await?;
//!
//!     for segment in &transcript.segments {
//!         println!("[{:>7.2}s] {}", segment.start, segment.subtitle);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod types;

pub use client::{TranscriptClient, DEFAULT_HOST};
pub use types::{TranscriptRequest, TranscriptResult, TranscriptSegment};

// Re-export the shared client plumbing
pub use rapidapi_core::{ClientOption, RapidApiError, RateLimiter, Result, Thumbnail};
