use axum::{
    http::StatusCode,
    middleware,
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod courses;
pub mod recommendations;
pub mod users;

use crate::middleware::{make_span, request_id_middleware};
use crate::state::AppState;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http().make_span_with(make_span))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(courses::list))
        .route("/recommend", get(recommendations::recommend))
        .route("/recommendations/:user_id", get(recommendations::get_saved))
        .route("/users/:user_id", put(users::upsert))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
