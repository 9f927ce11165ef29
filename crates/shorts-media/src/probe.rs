//! Source duration probing via ffprobe.

use std::path::Path;

use crate::command::{check_ffprobe, run_tool};
use crate::error::{MediaError, MediaResult};

/// Probe the container-level duration of a media file, in whole seconds.
///
/// Asks ffprobe for only the `format=duration` field and truncates the
/// floating-point result. Absent, unparsable, or non-positive values fail
/// with [`MediaError::ProbeFailed`].
pub async fn probe_duration_secs(path: impl AsRef<Path>) -> MediaResult<u64> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MediaError::FileNotFound(path.to_path_buf()));
    }

    check_ffprobe()?;

    let args = vec![
        "-v".to_string(),
        "error".to_string(),
        "-show_entries".to_string(),
        "format=duration".to_string(),
        "-of".to_string(),
        "default=noprint_wrappers=1:nokey=1".to_string(),
        path.to_string_lossy().to_string(),
    ];

    let output = run_tool("ffprobe", &args, None).await?;
    parse_duration_secs(&output)
}

/// Parse ffprobe's plain numeric duration output.
fn parse_duration_secs(raw: &str) -> MediaResult<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MediaError::probe_failed("ffprobe returned no duration"));
    }

    let secs: f64 = trimmed
        .parse()
        .map_err(|_| MediaError::probe_failed(format!("unparsable duration {trimmed:?}")))?;
    if !secs.is_finite() {
        return Err(MediaError::probe_failed(format!(
            "non-finite duration {secs}"
        )));
    }

    // Truncate before the positivity check, matching integer-second semantics
    let whole = secs as i64;
    if whole <= 0 {
        return Err(MediaError::probe_failed(format!(
            "non-positive duration {secs}"
        )));
    }

    Ok(whole as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration_secs("125.460000\n").unwrap(), 125);
        assert_eq!(parse_duration_secs("60").unwrap(), 60);
    }

    #[test]
    fn test_parse_duration_sub_second_source() {
        // Truncates to zero, which is unusable
        assert!(matches!(
            parse_duration_secs("0.9"),
            Err(MediaError::ProbeFailed(_))
        ));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(matches!(
            parse_duration_secs("N/A"),
            Err(MediaError::ProbeFailed(_))
        ));
        assert!(matches!(
            parse_duration_secs(""),
            Err(MediaError::ProbeFailed(_))
        ));
        assert!(matches!(
            parse_duration_secs("  \n"),
            Err(MediaError::ProbeFailed(_))
        ));
    }

    #[test]
    fn test_parse_duration_rejects_non_positive() {
        assert!(matches!(
            parse_duration_secs("0"),
            Err(MediaError::ProbeFailed(_))
        ));
        assert!(matches!(
            parse_duration_secs("-4.2"),
            Err(MediaError::ProbeFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_probe_missing_file() {
        let err = probe_duration_secs("/nonexistent/video.mp4")
            .await
            .unwrap_err();
        assert!(matches!(err, MediaError::FileNotFound(_)));
    }
}
