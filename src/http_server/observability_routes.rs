//! Service HTTP Routes
//!
//! Health check and the endpoint index served at `/`.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Endpoint index, also printed by `flashdeck routes`
pub fn endpoint_index() -> Value {
    json!({
        "message": "Flashcard API",
        "endpoints": {
            "all_flashcards": "/Flashcard/all",
            "red_flashcards": "/Flashcard/red",
            "yellow_flashcards": "/Flashcard/yellow",
            "green_flashcards": "/Flashcard/green",
            "single_flashcard": "/Flashcard/<flashcard_id>",
            "create_flashcard": "/Flashcard [POST]",
            "update_flashcard": "/Flashcard/<flashcard_id> [PATCH]",
            "delete_flashcard": "/Flashcard/<flashcard_id> [DELETE]",
            "activity_heatmap": "/heatmap",
            "health": "/health"
        }
    })
}

/// Health check and index routes
pub fn service_routes() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
}

async fn index_handler() -> Json<Value> {
    Json(endpoint_index())
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
