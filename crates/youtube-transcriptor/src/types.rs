//! Data types for the transcript endpoint

use std::fmt;

use rapidapi_core::Thumbnail;
use serde::{Deserialize, Serialize};

/// Per-call options for [`crate::TranscriptClient::get_transcript`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptRequest {
    lang: Option<String>,
}

impl TranscriptRequest {
    /// Default language when none (or an empty one) is set
    pub const DEFAULT_LANG: &'static str = "en";

    /// Set the transcript language (e.g. `"fr"`)
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Effective language, `"en"` unless a non-empty one was set
    pub fn lang(&self) -> &str {
        match self.lang.as_deref() {
            Some(lang) if !lang.is_empty() => lang,
            _ => Self::DEFAULT_LANG,
        }
    }
}

/// One timed line of a transcript
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSegment {
    /// Subtitle text
    pub subtitle: String,
    /// Start offset in seconds
    pub start: f64,
    /// Duration in seconds
    pub dur: f64,
}

impl TranscriptSegment {
    /// End offset in seconds
    pub fn end(&self) -> f64 {
        self.start + self.dur
    }
}

/// Transcript of a video together with its metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TranscriptResult {
    /// Video title
    pub title: String,
    /// Video description
    pub description: String,
    /// Languages the transcript is available in
    pub available_langs: Vec<String>,
    /// Video length in seconds, as the service formats it
    pub length_in_seconds: String,
    /// Video thumbnails
    pub thumbnails: Vec<Thumbnail>,
    /// Transcript lines in playback order
    #[serde(rename = "transcription")]
    pub segments: Vec<TranscriptSegment>,
}

impl TranscriptResult {
    /// All subtitles joined by a single space
    ///
    /// # Example
    /// ```
    /// use youtube_transcriptor::{TranscriptResult, TranscriptSegment};
    ///
    /// let transcript = TranscriptResult {
    ///     segments: vec![
    ///         TranscriptSegment { subtitle: "Hello".into(), start: 0.0, dur: 1.0 },
    ///         TranscriptSegment { subtitle: "world".into(), start: 1.0, dur: 1.0 },
    ///     ],
    ///     ..Default::default()
    /// };
    /// assert_eq!(transcript.full_text(), "Hello world");
    /// ```
    pub fn full_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.subtitle.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for TranscriptResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_text())
    }
}
