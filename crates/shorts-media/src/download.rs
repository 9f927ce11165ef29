//! Source video download using yt-dlp.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::command::{check_ytdlp, run_tool};
use crate::error::{MediaError, MediaResult};

/// Filename stem for the downloaded source inside the workspace.
pub const SOURCE_STEM: &str = "input";

/// Format selection: best MP4 video+audio, merged by yt-dlp if needed.
const FORMAT_SELECTOR: &str = "bv*[ext=mp4]+ba[ext=m4a]/b[ext=mp4]/best";

/// Download the video at `url` into `dir` and return the resolved file path.
///
/// The output template fixes the stem but leaves the extension to yt-dlp,
/// so the actual file is located afterwards by stem glob. Playlist expansion
/// is disabled; exactly one video is fetched even for playlist URLs.
pub async fn download_source(url: &str, dir: &Path) -> MediaResult<PathBuf> {
    check_ytdlp()?;

    let template = dir.join(format!("{SOURCE_STEM}.%(ext)s"));
    let args = vec![
        "-f".to_string(),
        FORMAT_SELECTOR.to_string(),
        "-o".to_string(),
        template.to_string_lossy().to_string(),
        "--no-playlist".to_string(),
        url.to_string(),
    ];

    run_tool("yt-dlp", &args, None).await?;

    let source = resolve_source(dir)?;
    let size = source.metadata()?.len();
    info!(
        source = %source.display(),
        size_mb = size as f64 / (1024.0 * 1024.0),
        "Downloaded source video"
    );

    Ok(source)
}

/// Locate the downloaded file by its stem, whatever extension it ended up with.
fn resolve_source(dir: &Path) -> MediaResult<PathBuf> {
    let prefix = format!("{SOURCE_STEM}.");
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with(&prefix) {
            return Ok(entry.path());
        }
    }
    Err(MediaError::download_failed(format!(
        "no {prefix}* file found in {}",
        dir.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_source_finds_any_extension() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("input.webm"), b"x").unwrap();

        let resolved = resolve_source(dir.path()).unwrap();
        assert_eq!(resolved.file_name().unwrap(), "input.webm");
    }

    #[test]
    fn test_resolve_source_ignores_other_stems() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("short.mp4"), b"x").unwrap();
        std::fs::write(dir.path().join("inputs_notes.txt"), b"x").unwrap();

        assert!(matches!(
            resolve_source(dir.path()),
            Err(MediaError::DownloadFailed(_))
        ));
    }

    #[test]
    fn test_resolve_source_empty_dir_fails() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            resolve_source(dir.path()),
            Err(MediaError::DownloadFailed(_))
        ));
    }
}
