//! Client construction options
//!
//! A client is configured by an ordered list of [`ClientOption`] values.
//! Options are applied strictly in the order given and the first one that
//! fails validation aborts construction; whatever was applied before it is
//! discarded. Anything left unset falls back to the service's
//! [`ServiceDefaults`].

use std::time::Duration;

use reqwest::Url;

use crate::client::RateLimiter;
use crate::error::{RapidApiError, Result};

/// User-Agent sent by the default HTTP client
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Request timeout of the default HTTP client
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-service fallback values used for options the caller did not set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDefaults {
    /// RapidAPI host of the service (e.g. `youtube-transcriptor.p.rapidapi.com`)
    pub host: &'static str,
    /// Requests admitted per `per`
    pub requests: u32,
    /// Interval the `requests` budget applies to
    pub per: Duration,
}

/// A single construction option
///
/// Build them with the associated functions, e.g.
/// [`ClientOption::host`] or [`ClientOption::rate_limit`].
#[derive(Debug, Clone)]
pub enum ClientOption {
    /// RapidAPI host, without scheme. Requests go to `https://{host}`.
    Host(String),
    /// Full `http(s)://host[:port]` base URL, for gateways and mock servers
    BaseUrl(String),
    /// Rate limiter to take a slot from before every request
    RateLimit(RateLimiter),
    /// HTTP client used to execute requests
    HttpClient(reqwest::Client),
}

impl ClientOption {
    /// Send requests to `https://{host}`.
    ///
    /// # Example
    /// ```
    /// use rapidapi_core::{ClientConfig, ClientOption, ServiceDefaults};
    /// use std::time::Duration;
    ///
    /// let defaults = ServiceDefaults {
    ///     host: "example.p.rapidapi.com",
    ///     requests: 1,
    ///     per: Duration::from_secs(1),
    /// };
    /// let config = ClientConfig::from_options(
    ///     &defaults,
    ///     [ClientOption::host("other.p.rapidapi.com")],
    /// )
    /// .unwrap();
    /// assert_eq!(config.base_url(), "https://other.p.rapidapi.com");
    /// ```
    pub fn host(host: impl Into<String>) -> Self {
        Self::Host(host.into())
    }

    /// Send requests to an explicit base URL instead of `https://{host}`.
    pub fn base_url(url: impl Into<String>) -> Self {
        Self::BaseUrl(url.into())
    }

    /// Use a caller-owned rate limiter. Clones share state, so passing the
    /// same limiter to several clients makes them share one budget.
    pub fn rate_limit(limiter: RateLimiter) -> Self {
        Self::RateLimit(limiter)
    }

    /// Use a caller-owned HTTP client.
    pub fn http_client(client: reqwest::Client) -> Self {
        Self::HttpClient(client)
    }

    fn apply(self, pending: &mut PendingConfig) -> Result<()> {
        match self {
            // An empty host leaves the service default in place
            Self::Host(host) if host.is_empty() => pending.endpoint = None,
            Self::Host(host) => pending.endpoint = Some(parse_host(&host)?),
            Self::BaseUrl(url) => pending.endpoint = Some(parse_base_url(&url)?),
            Self::RateLimit(limiter) => pending.rate_limiter = Some(limiter),
            Self::HttpClient(client) => pending.http_client = Some(client),
        }
        Ok(())
    }
}

/// Where requests are sent and what `X-RapidAPI-Host` says
#[derive(Debug, Clone, PartialEq, Eq)]
struct Endpoint {
    base_url: String,
    host: String,
}

#[derive(Default)]
struct PendingConfig {
    endpoint: Option<Endpoint>,
    rate_limiter: Option<RateLimiter>,
    http_client: Option<reqwest::Client>,
}

/// Validated, immutable client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    host: String,
    rate_limiter: RateLimiter,
    http_client: reqwest::Client,
}

impl ClientConfig {
    /// Apply `options` in order on top of `defaults`.
    ///
    /// # Errors
    /// Returns the error of the first option that fails validation, or
    /// `RapidApiError::Config` if the default HTTP client cannot be built.
    pub fn from_options<I>(defaults: &ServiceDefaults, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = ClientOption>,
    {
        let mut pending = PendingConfig::default();
        for option in options {
            option.apply(&mut pending)?;
        }

        let Endpoint { base_url, host } = match pending.endpoint {
            Some(endpoint) => endpoint,
            None => parse_host(defaults.host)?,
        };
        let rate_limiter = pending
            .rate_limiter
            .unwrap_or_else(|| RateLimiter::new(defaults.requests, defaults.per));
        let http_client = match pending.http_client {
            Some(client) => client,
            None => default_http_client()?,
        };

        Ok(Self {
            base_url,
            host,
            rate_limiter,
            http_client,
        })
    }

    /// Base URL requests are sent to, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Value of the `X-RapidAPI-Host` header
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Rate limiter shared by every request of this client
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    /// HTTP client used to execute requests
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Build `{base_url}{path}?k1=v1&k2=v2` with percent-encoded values.
    pub fn endpoint_url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }
}

fn default_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .map_err(|e| RapidApiError::Config(format!("failed to build HTTP client: {e}")))
}

fn parse_host(host: &str) -> Result<Endpoint> {
    let url = Url::parse(&format!("https://{host}"))
        .map_err(|e| RapidApiError::Config(format!("invalid host {host:?}: {e}")))?;
    if authority(&url).is_none() {
        return Err(RapidApiError::Config(format!("invalid host {host:?}: not a bare host")));
    }

    // Sent as given; the parsed form lowercases and drops default ports
    Ok(Endpoint {
        base_url: format!("https://{host}"),
        host: host.to_string(),
    })
}

fn parse_base_url(raw: &str) -> Result<Endpoint> {
    let url = Url::parse(raw)
        .map_err(|e| RapidApiError::Config(format!("invalid base URL {raw:?}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(RapidApiError::Config(format!(
            "invalid base URL {raw:?}: unsupported scheme {:?}",
            url.scheme()
        )));
    }
    let authority = authority(&url).ok_or_else(|| {
        RapidApiError::Config(format!("invalid base URL {raw:?}: expected scheme and host only"))
    })?;

    Ok(Endpoint {
        base_url: format!("{}://{}", url.scheme(), authority),
        host: authority,
    })
}

/// `host[:port]` of a URL that carries nothing else
fn authority(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    if url.path() != "/"
        || url.query().is_some()
        || url.fragment().is_some()
        || !url.username().is_empty()
        || url.password().is_some()
    {
        return None;
    }

    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
