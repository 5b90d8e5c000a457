//! Flashcard HTTP Routes
//!
//! CRUD endpoints over the flashcard service. Every matched request on these
//! routes is counted by the activity recorder once the handler returns,
//! whatever its status.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, Request, State,
    },
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};
use super::state::AppState;
use crate::flashcards::{Flashcard, FlashcardInput, FlashcardView, Tag};

// ==================
// Request/Response Types
// ==================

/// Query string accepted by every read path
#[derive(Debug, Default, Deserialize)]
pub struct RevealQuery {
    #[serde(default)]
    pub reveal: Option<String>,
}

impl RevealQuery {
    /// `1`, `yes` or `true` (any case) reveal answers; anything else hides them
    pub fn is_set(&self) -> bool {
        self.reveal
            .as_deref()
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "yes" | "true"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Flashcard Routes
// ==================

/// Create flashcard routes
pub fn flashcard_routes(state: AppState) -> Router {
    let mut router = Router::new().route("/Flashcard/all", get(list_all_handler));

    for tag in Tag::ALL {
        router = router.route(
            &format!("/Flashcard/{}", tag.slug()),
            get(
                move |state: State<AppState>, query: Result<Query<RevealQuery>, QueryRejection>| {
                    list_by_tag_handler(tag, state, query)
                },
            ),
        );
    }

    router
        .route("/Flashcard", post(create_handler))
        .route(
            "/Flashcard/{id}",
            get(get_handler).patch(update_handler).delete(delete_handler),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), record_activity))
        .with_state(state)
}

/// Count the request against today once the handler has run
async fn record_activity(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    state.activity.record_today();
    response
}

// ==================
// Helper Functions
// ==================

fn reveal_flag(query: Result<Query<RevealQuery>, QueryRejection>) -> ApiResult<bool> {
    let Query(query) = query?;
    Ok(query.is_set())
}

fn flashcard_id(path: Result<Path<u64>, PathRejection>) -> ApiResult<u64> {
    let Path(id) = path.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(id)
}

// ==================
// Handlers
// ==================

async fn list_all_handler(
    State(state): State<AppState>,
    query: Result<Query<RevealQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<FlashcardView>>> {
    let reveal = reveal_flag(query)?;
    Ok(Json(state.flashcards.list_all(reveal)))
}

async fn list_by_tag_handler(
    tag: Tag,
    State(state): State<AppState>,
    query: Result<Query<RevealQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<FlashcardView>>> {
    let reveal = reveal_flag(query)?;
    Ok(Json(state.flashcards.list_by_tag(tag, reveal)))
}

async fn get_handler(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    query: Result<Query<RevealQuery>, QueryRejection>,
) -> ApiResult<Json<FlashcardView>> {
    let id = flashcard_id(path)?;
    let reveal = reveal_flag(query)?;
    Ok(Json(state.flashcards.get(id, reveal)?))
}

async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<FlashcardInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Flashcard>)> {
    let Json(input) = payload?;
    let card = state.flashcards.create(input)?;
    Ok((StatusCode::CREATED, Json(card)))
}

async fn update_handler(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<FlashcardInput>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = flashcard_id(path)?;
    let Json(input) = payload?;
    state.flashcards.update(id, input)?;
    Ok(Json(MessageResponse {
        message: "updated".to_string(),
    }))
}

async fn delete_handler(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = flashcard_id(path)?;
    state.flashcards.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(reveal: Option<&str>) -> RevealQuery {
        RevealQuery {
            reveal: reveal.map(str::to_string),
        }
    }

    #[test]
    fn test_reveal_flag_values() {
        for on in ["1", "yes", "true", "TRUE", "Yes"] {
            assert!(query(Some(on)).is_set(), "{} should reveal", on);
        }
        for off in ["0", "no", "false", "", "maybe"] {
            assert!(!query(Some(off)).is_set(), "{} should hide", off);
        }
        assert!(!query(None).is_set());
    }

    #[test]
    fn test_routes_build() {
        let _router = flashcard_routes(AppState::new());
    }
}
