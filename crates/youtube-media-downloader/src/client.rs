//! Client for the channel videos endpoint

use std::time::Duration;

use rapidapi_core::{ClientConfig, ClientOption, RapidApiClient, Result, ServiceDefaults};
use tracing::debug;

use crate::types::{ChannelVideosRequest, ChannelVideosResponse, VideoSummary};

/// RapidAPI host of the media downloader service
pub const DEFAULT_HOST: &str = "youtube-media-downloader.p.rapidapi.com";

/// Path of the channel videos endpoint
const CHANNEL_VIDEOS_PATH: &str = "/v2/channel/videos";

/// Host and pacing used when no options override them (3 requests/second)
pub const DEFAULTS: ServiceDefaults = ServiceDefaults {
    host: DEFAULT_HOST,
    requests: 3,
    per: Duration::from_secs(1),
};

/// Client listing the videos of a YouTube channel
///
/// # Example
/// ```no_run
/// use youtube_media_downloader::{ChannelVideosClient, ChannelVideosRequest};
///
/// # async fn example() -> rapidapi_core::Result<()> {
/// let client = ChannelVideosClient::new("my-rapidapi-key", [])?;
/// let videos = client
///     .get_channel_videos("UCuAXFkgsw1L7xaCfnd5JJOw", ChannelVideosRequest::default())
///     .await?;
/// for video in videos {
///     println!("{} ({})", video.title, video.length_text);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ChannelVideosClient {
    inner: RapidApiClient,
}

impl ChannelVideosClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `api_key` - RapidAPI key
    /// * `options` - Construction options, applied in order
    ///
    /// # Errors
    /// Returns `RapidApiError::Config` from the first invalid option.
    pub fn new<I>(api_key: impl Into<String>, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = ClientOption>,
    {
        let inner = RapidApiClient::new(api_key, &DEFAULTS, options)?;
        Ok(Self { inner })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    /// List the videos of a channel
    ///
    /// Returns the first page of items in the order the service sends them.
    ///
    /// The content type of `request` is not sent to the service: the
    /// endpoint is always queried with `channelId` and `lang` only, so the
    /// service's own default tab is listed.
    ///
    /// # Errors
    /// - `RapidApiError::Execution` - Network failure
    /// - `RapidApiError::HttpStatus` - Non-200 response, with the raw body
    /// - `RapidApiError::Decode` - Unexpected response body
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_channel_videos(
        &self,
        channel_id: &str,
        request: ChannelVideosRequest,
    ) -> Result<Vec<VideoSummary>> {
        let lang = request.lang();
        debug!(
            content_type = %request.content_type(),
            "content type is not forwarded to the service"
        );

        let response: ChannelVideosResponse = self
            .inner
            .get_json(CHANNEL_VIDEOS_PATH, &[("channelId", channel_id), ("lang", lang)])
            .await?;

        debug!(items = response.items.len(), "received channel videos");
        Ok(response.items)
    }
}
