//! Vertical clip rendering via ffmpeg.

use std::path::Path;
use tracing::info;

use crate::command::{check_ffmpeg, run_tool, FfmpegCommand};
use crate::error::{MediaError, MediaResult};
use crate::window::ClipWindow;

/// Scale to cover 1080x1920 preserving aspect ratio, then center-crop to the
/// exact target. The ordering guarantees no letterboxing.
pub const PORTRAIT_FILTER: &str =
    "scale=1080:1920:force_original_aspect_ratio=increase,crop=1080:1920";

/// Fixed output frame rate.
const OUTPUT_FRAME_RATE: u32 = 30;

/// H.264 video with a speed-oriented preset.
const VIDEO_CODEC: &str = "libx264";
const PRESET: &str = "veryfast";
const CRF: u8 = 23;

/// AAC audio.
const AUDIO_CODEC: &str = "aac";
const AUDIO_BITRATE: &str = "128k";

/// Render the selected window of `input` as a 1080x1920 vertical clip.
///
/// Trims to the window, applies the scale-then-center-crop filter, re-encodes
/// H.264/AAC, and relocates container metadata for progressive download.
pub async fn render_short(input: &Path, window: ClipWindow, output: &Path) -> MediaResult<()> {
    check_ffmpeg()?;

    info!(
        input = %input.display(),
        output = %output.display(),
        start = window.start,
        length = window.length,
        "Rendering vertical clip"
    );

    let cmd = FfmpegCommand::new(input, output)
        .seek(window.start)
        .duration(window.length)
        .video_filter(PORTRAIT_FILTER)
        .frame_rate(OUTPUT_FRAME_RATE)
        .video_codec(VIDEO_CODEC)
        .preset(PRESET)
        .crf(CRF)
        .audio_codec(AUDIO_CODEC)
        .audio_bitrate(AUDIO_BITRATE)
        .faststart();

    match run_tool("ffmpeg", &cmd.build_args(), None).await {
        Ok(_) => Ok(()),
        Err(MediaError::ToolFailed { output, .. }) => Err(MediaError::TranscodeFailed { output }),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcode_recipe() {
        let window = ClipWindow {
            start: 12,
            length: 45,
        };
        let cmd = FfmpegCommand::new("in.mp4", "short.mp4")
            .seek(window.start)
            .duration(window.length)
            .video_filter(PORTRAIT_FILTER)
            .frame_rate(30)
            .video_codec(VIDEO_CODEC)
            .preset(PRESET)
            .crf(CRF)
            .audio_codec(AUDIO_CODEC)
            .audio_bitrate(AUDIO_BITRATE)
            .faststart();

        let args = cmd.build_args();
        assert!(args.contains(&"-vf".to_string()));
        assert!(args.contains(&PORTRAIT_FILTER.to_string()));
        assert!(args.contains(&"12".to_string()));
        assert!(args.contains(&"45".to_string()));
        assert!(args.contains(&"+faststart".to_string()));
        assert!(args.contains(&"veryfast".to_string()));
        assert!(args.contains(&"128k".to_string()));
    }

    #[test]
    fn test_portrait_filter_scales_before_crop() {
        let scale_pos = PORTRAIT_FILTER.find("scale").unwrap();
        let crop_pos = PORTRAIT_FILTER.find("crop").unwrap();
        assert!(scale_pos < crop_pos);
    }
}
