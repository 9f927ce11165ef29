//! YouTube URL validation.
//!
//! Downloads are driven by a URL handed straight to an external tool, so the
//! host is checked against a fixed allow-list before anything is spawned.

use thiserror::Error;
use url::Url;

/// Maximum accepted URL length.
const MAX_URL_LENGTH: usize = 2048;

/// Hosts accepted for download. Exact matches only.
const ALLOWED_HOSTS: [&str; 4] = ["www.youtube.com", "youtube.com", "youtu.be", "m.youtube.com"];

/// Errors produced by URL validation. All map to a client error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("URL exceeds maximum length of {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("Invalid URL format: {0}")]
    Invalid(String),

    #[error("Invalid protocol '{0}'. Only HTTP and HTTPS are allowed.")]
    SchemeNotAllowed(String),

    #[error("Host '{0}' is not a YouTube domain")]
    HostNotAllowed(String),
}

/// Validate a YouTube video URL.
///
/// Returns the trimmed URL on success. The host must be exactly one of the
/// allowed YouTube domains; subdomains and lookalikes are rejected.
pub fn validate_youtube_url(url: &str) -> Result<String, UrlError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(UrlError::Empty);
    }
    if url.len() > MAX_URL_LENGTH {
        return Err(UrlError::TooLong);
    }

    let parsed = Url::parse(url).map_err(|e| UrlError::Invalid(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlError::SchemeNotAllowed(scheme.to_string())),
    }

    let host = parsed
        .host_str()
        .ok_or_else(|| UrlError::Invalid("URL must have a host".to_string()))?
        .to_ascii_lowercase();

    if !ALLOWED_HOSTS.contains(&host.as_str()) {
        return Err(UrlError::HostNotAllowed(host));
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_hosts() {
        for url in [
            "https://www.youtube.com/watch?v=abc123def45",
            "https://youtube.com/watch?v=abc123def45",
            "https://youtu.be/abc123def45",
            "https://m.youtube.com/watch?v=abc123def45",
            "http://youtube.com/watch?v=abc123def45",
        ] {
            assert_eq!(validate_youtube_url(url).as_deref(), Ok(url));
        }
    }

    #[test]
    fn test_disallowed_hosts() {
        assert_eq!(
            validate_youtube_url("https://example.com/watch?v=x"),
            Err(UrlError::HostNotAllowed("example.com".to_string()))
        );
        // Lookalike and subdomain hosts are not in the allow-list
        assert!(matches!(
            validate_youtube_url("https://notyoutube.com/watch?v=x"),
            Err(UrlError::HostNotAllowed(_))
        ));
        assert!(matches!(
            validate_youtube_url("https://music.youtube.com/watch?v=x"),
            Err(UrlError::HostNotAllowed(_))
        ));
    }

    #[test]
    fn test_malformed_urls() {
        assert!(matches!(
            validate_youtube_url("not a url"),
            Err(UrlError::Invalid(_))
        ));
        assert_eq!(validate_youtube_url(""), Err(UrlError::Empty));
        assert_eq!(validate_youtube_url("   "), Err(UrlError::Empty));
    }

    #[test]
    fn test_scheme_restriction() {
        assert_eq!(
            validate_youtube_url("ftp://youtube.com/watch?v=x"),
            Err(UrlError::SchemeNotAllowed("ftp".to_string()))
        );
        assert_eq!(
            validate_youtube_url("file:///etc/passwd"),
            Err(UrlError::SchemeNotAllowed("file".to_string()))
        );
    }

    #[test]
    fn test_trims_whitespace() {
        let url = "  https://youtu.be/abc123def45  ";
        assert_eq!(
            validate_youtube_url(url).unwrap(),
            "https://youtu.be/abc123def45"
        );
    }

    #[test]
    fn test_over_long_url() {
        let url = format!("https://youtube.com/watch?v={}", "a".repeat(3000));
        assert_eq!(validate_youtube_url(&url), Err(UrlError::TooLong));
    }

    #[test]
    fn test_host_case_insensitive() {
        assert!(validate_youtube_url("https://WWW.YOUTUBE.COM/watch?v=x").is_ok());
    }
}
