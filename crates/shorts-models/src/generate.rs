//! Generate endpoint request and response types.

use serde::{Deserialize, Serialize};

/// Default clip length in seconds when the caller omits it.
pub const DEFAULT_CLIP_LENGTH: u64 = 60;

/// Filename reported for every generated clip.
pub const OUTPUT_FILENAME: &str = "short.mp4";

/// MIME type of the generated clip.
pub const OUTPUT_MIME: &str = "video/mp4";

/// How the finished clip is delivered to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// Chunked binary stream with an attachment disposition.
    #[default]
    Stream,
    /// Whole file base64-encoded inside a JSON document.
    Base64,
}

/// Request body for `POST /generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// Source video URL (must be a YouTube domain).
    pub youtube_url: String,

    /// Requested clip length in seconds. Clamped to [10, 60] before use.
    #[serde(default = "default_clip_length")]
    pub clip_length: u64,

    /// Delivery mode for the finished clip.
    #[serde(default)]
    pub response_mode: ResponseMode,
}

fn default_clip_length() -> u64 {
    DEFAULT_CLIP_LENGTH
}

/// JSON response body for `response_mode = "base64"`.
///
/// Holds the entire encoded clip in memory; large for long clips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Base64Clip {
    pub filename: String,
    pub mime: String,
    pub base64: String,
}

impl Base64Clip {
    /// Wrap already-encoded clip data with the fixed filename and MIME type.
    pub fn new(base64: impl Into<String>) -> Self {
        Self {
            filename: OUTPUT_FILENAME.to_string(),
            mime: OUTPUT_MIME.to_string(),
            base64: base64.into(),
        }
    }
}
