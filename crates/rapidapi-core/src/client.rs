//! Rate-limited HTTP client for RapidAPI services
//!
//! This module provides the request cycle shared by every RapidAPI client:
//! take a rate-limit slot, send a GET with the RapidAPI headers, check the
//! status and decode the JSON body. There is no retry logic; every failure
//! is returned to the caller as is.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::{ClientConfig, ClientOption, ServiceDefaults};
use crate::error::{RapidApiError, Result};

/// Header carrying the caller's RapidAPI key
pub const API_KEY_HEADER: &str = "X-RapidAPI-Key";

/// Header naming the RapidAPI service the request is for
pub const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// Rate limiter to control request frequency
///
/// Admits `requests` requests per `per`, spaced evenly: each request waits
/// until at least `per / requests` has passed since the previous one. The
/// first request goes through immediately. Waiting has no timeout.
///
/// Clones share state, so one limiter can pace several clients.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    /// Minimum interval between requests
    min_interval: Duration,
    /// Timestamp of the last admitted request
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    /// Create a new rate limiter admitting `requests` per `per`
    ///
    /// A `requests` of zero is treated as one.
    ///
    /// # Example
    /// ```
    /// use rapidapi_core::RateLimiter;
    /// use std::time::Duration;
    ///
    /// let limiter = RateLimiter::new(10, Duration::from_secs(1));
    /// assert_eq!(limiter.min_interval(), Duration::from_millis(100));
    /// ```
    pub fn new(requests: u32, per: Duration) -> Self {
        Self {
            min_interval: per / requests.max(1),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a new rate limiter from a requests-per-second rate
    ///
    /// Fractional rates are allowed (`0.5` is one request every two
    /// seconds). Rates that are not positive count as one per second.
    pub fn per_second(requests_per_second: f64) -> Self {
        let min_interval = Duration::try_from_secs_f64(1.0 / requests_per_second)
            .ok()
            .filter(|_| requests_per_second > 0.0)
            .unwrap_or(Duration::from_secs(1));
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Acquire permission to make a request
    ///
    /// Waits if necessary so the minimum interval between requests is
    /// respected. Concurrent callers are admitted one at a time.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                debug!(?wait_time, "waiting for rate limit slot");
                sleep(wait_time).await;
            }
        }

        *last = Some(Instant::now());
    }

    /// Get the minimum interval between requests
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// HTTP client for one RapidAPI service
///
/// Holds the caller's API key and a validated [`ClientConfig`]. Service
/// crates wrap this type and add typed endpoint methods on top of
/// [`RapidApiClient::get_json`].
#[derive(Clone)]
pub struct RapidApiClient {
    api_key: String,
    config: ClientConfig,
}

impl std::fmt::Debug for RapidApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RapidApiClient")
            .field("api_key", &"<redacted>")
            .field("config", &self.config)
            .finish()
    }
}

impl RapidApiClient {
    /// Create a client for the service described by `defaults`
    ///
    /// # Arguments
    /// * `api_key` - RapidAPI key sent with every request
    /// * `defaults` - Host and rate used for options that are not given
    /// * `options` - Construction options, applied in order
    ///
    /// # Errors
    /// Returns the error of the first option that fails validation.
    pub fn new<I>(api_key: impl Into<String>, defaults: &ServiceDefaults, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = ClientOption>,
    {
        let config = ClientConfig::from_options(defaults, options)?;
        Ok(Self {
            api_key: api_key.into(),
            config,
        })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `{base_url}{path}?{query}` and decode the JSON body into `T`
    ///
    /// # Errors
    /// - `RapidApiError::Execution` - Network failure or unreadable body
    /// - `RapidApiError::HttpStatus` - Status other than 200, with the raw body
    /// - `RapidApiError::Decode` - Body does not match `T`
    #[tracing::instrument(level = "debug", skip(self), fields(host = %self.config.host()))]
    pub async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.config.endpoint_url(path, query);

        self.config.rate_limiter().acquire().await;

        debug!(%url, "sending request");
        let response = self
            .config
            .http_client()
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_HOST_HEADER, self.config.host())
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if status != StatusCode::OK {
            let body = String::from_utf8_lossy(&body).into_owned();
            warn!(%status, "service returned non-OK status");
            return Err(RapidApiError::HttpStatus { status, body });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTS: ServiceDefaults = ServiceDefaults {
        host: "example.p.rapidapi.com",
        requests: 10,
        per: Duration::from_secs(1),
    };

    #[test]
    fn test_rate_limiter_spreads_count_over_interval() {
        let cases = [
            (3, Duration::from_secs(1), Duration::from_secs(1) / 3),
            (4, Duration::from_millis(200), Duration::from_millis(50)),
            (30, Duration::from_secs(60), Duration::from_secs(2)),
            (1, Duration::from_secs(5), Duration::from_secs(5)),
        ];

        for (requests, per, expected) in cases {
            assert_eq!(RateLimiter::new(requests, per).min_interval(), expected);
        }
    }

    #[test]
    fn test_rate_limiter_per_second() {
        assert_eq!(RateLimiter::per_second(10.0).min_interval(), Duration::from_millis(100));
        assert_eq!(RateLimiter::per_second(0.5).min_interval(), Duration::from_secs(2));
    }

    #[test]
    fn test_rate_limiter_per_second_non_positive() {
        assert_eq!(RateLimiter::per_second(0.0).min_interval(), Duration::from_secs(1));
        assert_eq!(RateLimiter::per_second(-2.0).min_interval(), Duration::from_secs(1));
        assert_eq!(RateLimiter::per_second(f64::NAN).min_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_rate_limiter_zero_requests() {
        let limiter = RateLimiter::new(0, Duration::from_secs(1));
        assert_eq!(limiter.min_interval(), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_rate_limiter_first_acquire_is_immediate() {
        let limiter = RateLimiter::new(1, Duration::from_secs(10));

        let start = Instant::now();
        limiter.acquire().await;

        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_rate_limiter_spaces_consecutive_slots() {
        let limiter = RateLimiter::new(2, Duration::from_millis(300));

        limiter.acquire().await;
        let after_first = Instant::now();
        limiter.acquire().await;

        assert!(after_first.elapsed() >= Duration::from_millis(140));
    }

    #[tokio::test]
    async fn test_rate_limiter_n_plus_one_takes_one_interval() {
        let limiter = RateLimiter::new(5, Duration::from_millis(500));

        let start = Instant::now();
        for _ in 0..6 {
            limiter.acquire().await;
        }
        let elapsed = start.elapsed();

        assert!(elapsed >= Duration::from_millis(500));
        assert!(elapsed < Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn test_rate_limiter_clones_share_state() {
        let limiter = RateLimiter::new(10, Duration::from_secs(1));
        let clone = limiter.clone();

        let start = Instant::now();
        limiter.acquire().await;
        clone.acquire().await;

        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[test]
    fn test_client_creation() {
        let client = RapidApiClient::new("key", &DEFAULTS, []);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_creation_invalid_option() {
        let client = RapidApiClient::new("key", &DEFAULTS, [ClientOption::host("no such host!")]);
        assert!(matches!(client, Err(RapidApiError::Config(_))));
    }

    #[test]
    fn test_client_debug_redacts_api_key() {
        let client = RapidApiClient::new("super-secret", &DEFAULTS, []).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
