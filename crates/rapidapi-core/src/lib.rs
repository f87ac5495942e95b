//! RapidAPI Client Core Library
//!
//! Shared plumbing for the RapidAPI YouTube service clients
//! (`youtube-media-downloader`, `youtube-transcriptor`).
//!
//! # Features
//! - Ordered, validated construction options ([`ClientOption`])
//! - Rate limiter pacing requests to a fixed admission rate
//! - One rate-limited GET/JSON request cycle with the RapidAPI headers
//! - A single error type covering config, transport, status and decoding

pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{RapidApiClient, RateLimiter, API_HOST_HEADER, API_KEY_HEADER};
pub use config::{ClientConfig, ClientOption, ServiceDefaults};
pub use error::{RapidApiError, Result};
pub use types::Thumbnail;

// Callers hand their own `reqwest::Client` to `ClientOption::http_client`
pub use reqwest;
