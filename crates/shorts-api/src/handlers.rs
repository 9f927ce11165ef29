//! Request handlers.

use std::path::Path;

use axum::body::{Body, Bytes};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::info;

use shorts_media::{
    check_ffmpeg, check_ffprobe, check_ytdlp, download_source, plan_clip_window,
    probe_duration_secs, render_short, MediaError, Workspace,
};
use shorts_models::{
    validate_youtube_url, Base64Clip, GenerateRequest, ResponseMode, OUTPUT_FILENAME, OUTPUT_MIME,
};

use crate::error::{ApiError, ApiResult};

/// Chunk size for streamed clip delivery (1 MiB).
const STREAM_CHUNK_SIZE: usize = 1024 * 1024;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Health check endpoint (liveness probe).
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Ping response.
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Ping endpoint.
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        message: "API is alive",
    })
}

/// Generate a vertical clip from a YouTube video.
///
/// Sequential pipeline: validate URL, check tool availability, download the
/// source into a fresh workspace, probe its duration, pick a clip window,
/// render the vertical clip, then deliver it as a stream or base64 JSON.
/// The workspace is removed on every exit path; failures map to 400 (bad
/// input) or 500 (missing tool, tool failure) with the detail in the body.
pub async fn generate(Json(request): Json<GenerateRequest>) -> ApiResult<Response> {
    let url =
        validate_youtube_url(&request.youtube_url).map_err(|e| ApiError::bad_request(e.to_string()))?;

    check_ffmpeg().map_err(ApiError::dependency)?;
    check_ffprobe().map_err(ApiError::dependency)?;
    check_ytdlp().map_err(ApiError::dependency)?;

    let workspace = Workspace::create()?;

    let source = download_source(&url, workspace.path()).await?;
    let duration = probe_duration_secs(&source).await?;
    let window = plan_clip_window(duration, request.clip_length)?;

    info!(
        url = %url,
        duration_secs = duration,
        start = window.start,
        length = window.length,
        "Clip window selected"
    );

    let output = workspace.path().join(OUTPUT_FILENAME);
    render_short(&source, window, &output).await?;

    match request.response_mode {
        ResponseMode::Base64 => base64_response(&output, workspace).await,
        ResponseMode::Stream => stream_response(&output, workspace).await,
    }
}

/// Deliver the clip as a single base64 JSON document.
///
/// Reads the whole file into memory; the workspace is dropped as soon as the
/// bytes are read.
async fn base64_response(output: &Path, workspace: Workspace) -> ApiResult<Response> {
    let bytes = tokio::fs::read(output).await.map_err(MediaError::from)?;
    drop(workspace);

    Ok(Json(Base64Clip::new(BASE64.encode(bytes))).into_response())
}

/// Deliver the clip as a chunked attachment stream.
///
/// The stream state owns the workspace guard, so the temp directory is
/// removed only after the final chunk is sent or the client disconnects.
async fn stream_response(output: &Path, workspace: Workspace) -> ApiResult<Response> {
    let file = tokio::fs::File::open(output).await.map_err(MediaError::from)?;

    let stream = futures_util::stream::unfold(Some((file, workspace)), |state| async move {
        let (mut file, workspace) = state?;
        let mut buf = vec![0u8; STREAM_CHUNK_SIZE];
        match file.read(&mut buf).await {
            Ok(0) => None,
            Ok(n) => {
                buf.truncate(n);
                Some((
                    Ok::<_, std::io::Error>(Bytes::from(buf)),
                    Some((file, workspace)),
                ))
            }
            Err(e) => Some((Err(e), None)),
        }
    });

    Response::builder()
        .header(header::CONTENT_TYPE, OUTPUT_MIME)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{OUTPUT_FILENAME}\""),
        )
        .header(header::CACHE_CONTROL, "no-store")
        .body(Body::from_stream(stream))
        .map_err(|e| ApiError::internal(format!("Failed to build response: {e}")))
}
