//! Clip window selection.

use rand::Rng;

use crate::error::{MediaError, MediaResult};

/// Minimum accepted clip length in seconds.
pub const MIN_CLIP_SECS: u64 = 10;

/// Maximum accepted clip length in seconds.
pub const MAX_CLIP_SECS: u64 = 60;

/// A source is "short" when it barely fits the requested window plus this margin.
const SHORT_SOURCE_MARGIN: u64 = 2;

/// Floor for the fallback window length on short sources.
const MIN_FALLBACK_SECS: u64 = 5;

/// The (start, length) time range to extract from the source video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipWindow {
    /// Start offset in whole seconds.
    pub start: u64,
    /// Window length in whole seconds.
    pub length: u64,
}

/// Pick a clip window inside a source of `duration_secs` seconds.
///
/// The requested length is clamped to `[10, 60]` regardless of what the
/// boundary already enforced. Short sources (duration within two seconds of
/// the clamped length) get a window anchored at zero with length
/// `max(5, duration - 1)`. Everything else gets the clamped length at a
/// start drawn uniformly from `[0, duration - length - 1]`, which leaves at
/// least one second of margin at the end.
pub fn plan_clip_window(duration_secs: u64, requested_secs: u64) -> MediaResult<ClipWindow> {
    if duration_secs == 0 {
        return Err(MediaError::probe_failed("source duration is zero"));
    }

    let length = requested_secs.clamp(MIN_CLIP_SECS, MAX_CLIP_SECS);

    if duration_secs <= length + SHORT_SOURCE_MARGIN {
        return Ok(ClipWindow {
            start: 0,
            length: MIN_FALLBACK_SECS.max(duration_secs - 1),
        });
    }

    let start = rand::rng().random_range(0..=duration_secs - length - 1);
    Ok(ClipWindow { start, length })
}
