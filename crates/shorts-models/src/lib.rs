//! Shared data models for the shorts generator backend.
//!
//! This crate provides Serde-serializable types for:
//! - The generate request/response surface
//! - YouTube URL validation

pub mod generate;
pub mod url;

// Re-export common types
pub use generate::{
    Base64Clip, GenerateRequest, ResponseMode, DEFAULT_CLIP_LENGTH, OUTPUT_FILENAME, OUTPUT_MIME,
};
pub use url::{validate_youtube_url, UrlError};
