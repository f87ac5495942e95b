//! Client for the transcript endpoint

use std::time::Duration;

use rapidapi_core::{ClientConfig, ClientOption, RapidApiClient, Result, ServiceDefaults};
use tracing::debug;

use crate::types::{TranscriptRequest, TranscriptResult};

/// RapidAPI host of the transcriptor service
pub const DEFAULT_HOST: &str = "youtube-transcriptor.p.rapidapi.com";

const TRANSCRIPT_PATH: &str = "/transcript";

/// Host and pacing used when no options override them (10 requests/second)
pub const DEFAULTS: ServiceDefaults = ServiceDefaults {
    host: DEFAULT_HOST,
    requests: 10,
    per: Duration::from_secs(1),
};

/// Client fetching YouTube video transcripts
#[derive(Debug, Clone)]
pub struct TranscriptClient {
    inner: RapidApiClient,
}

impl TranscriptClient {
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

    /// Fetch the transcript of a video
    ///
    /// # Example
    /// ```no_run
    /// use youtube_transcriptor::{TranscriptClient, TranscriptRequest};
    ///
    /// # async fn example() -> rapidapi_core::Result<()> {
    /// let client = TranscriptClient::new("my-rapidapi-key", [])?;
    /// let transcript = client
    ///     .get_transcript("dQw4w9WgXcQ", TranscriptRequest::default().with_lang("en"))
    ///     .await?;
    /// println!("{}", transcript.full_text());
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// - `RapidApiError::Execution` - Network failure
    /// - `RapidApiError::HttpStatus` - Non-200 response, with the raw body
    /// - `RapidApiError::Decode` - Unexpected response body
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_transcript(
        &self,
        video_id: &str,
        request: TranscriptRequest,
    ) -> Result<TranscriptResult> {
        let transcript: TranscriptResult = self
            .inner
            .get_json(TRANSCRIPT_PATH, &[("video_id", video_id), ("lang", request.lang())])
            .await?;

        debug!(segments = transcript.segments.len(), "received transcript");
        Ok(transcript)
    }
}
