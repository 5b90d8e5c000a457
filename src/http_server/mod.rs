//! # HTTP Server Module
//!
//! Axum server exposing the flashcard API.
//!
//! # Endpoints
//!
//! - `/` - Endpoint index
//! - `/health` - Health check
//! - `/Flashcard/*` - Flashcard CRUD and per-tag listings
//! - `/heatmap` - Calendar heatmap of daily request activity

pub mod activity_routes;
pub mod config;
pub mod errors;
pub mod flashcard_routes;
pub mod observability_routes;
pub mod server;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::{build_router, HttpServer};
pub use state::AppState;
