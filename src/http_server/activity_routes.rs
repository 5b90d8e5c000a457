//! Activity HTTP Routes
//!
//! Serves the request-activity heatmap. Requests here are not counted.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

use super::state::AppState;

/// Create activity routes
pub fn activity_routes(state: AppState) -> Router {
    Router::new()
        .route("/heatmap", get(heatmap_handler))
        .with_state(state)
}

async fn heatmap_handler(State(state): State<AppState>) -> impl IntoResponse {
    let days = state.activity.snapshot();
    let image = state.heatmap.render(&days);
    ([(header::CONTENT_TYPE, state.heatmap.content_type())], image)
}
