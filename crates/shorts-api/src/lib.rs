//! Axum HTTP API server for the shorts generator.
//!
//! This crate provides:
//! - The `/health`, `/ping` and `/generate` routes
//! - CORS, request logging and body-limit middleware
//! - Error mapping from pipeline failures to HTTP responses

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
