//! External-tool wrappers for clip generation.
//!
//! This crate sequences three command-line tools:
//! - `yt-dlp` to fetch a source video
//! - `ffprobe` to read its duration
//! - `ffmpeg` to trim a window and render it as a 1080x1920 vertical clip
//!
//! All process spawning goes through [`command::run_tool`]; every request
//! works inside its own [`workspace::Workspace`] temp directory.

pub mod command;
pub mod download;
pub mod error;
pub mod probe;
pub mod transcode;
pub mod window;
pub mod workspace;

// Re-export common types
pub use command::{check_ffmpeg, check_ffprobe, check_ytdlp, run_tool, FfmpegCommand};
pub use download::download_source;
pub use error::{MediaError, MediaResult};
pub use probe::probe_duration_secs;
pub use transcode::render_short;
pub use window::{plan_clip_window, ClipWindow};
pub use workspace::Workspace;
