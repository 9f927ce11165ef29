//! Error types for media operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur while running the clip pipeline.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("ffmpeg not found in PATH")]
    FfmpegNotFound,

    #[error("ffprobe not found in PATH")]
    FfprobeNotFound,

    #[error("yt-dlp not found in PATH")]
    YtDlpNotFound,

    /// Generic non-zero exit from an invoked tool, with captured output.
    #[error("command failed: {command}\n{output}")]
    ToolFailed {
        program: String,
        command: String,
        output: String,
    },

    #[error("download failed: {0}")]
    DownloadFailed(String),

    #[error("failed to probe duration: {0}")]
    ProbeFailed(String),

    #[error("transcode failed: {output}")]
    TranscodeFailed { output: String },

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MediaError {
    /// Create a download failure error.
    pub fn download_failed(message: impl Into<String>) -> Self {
        Self::DownloadFailed(message.into())
    }

    /// Create a probe failure error.
    pub fn probe_failed(message: impl Into<String>) -> Self {
        Self::ProbeFailed(message.into())
    }
}
