use axum::{extract::State, Json};

use crate::{models::CourseRecord, state::AppState};

/// Handler returning the full catalog in load order.
pub async fn list(State(state): State<AppState>) -> Json<Vec<CourseRecord>> {
    Json(state.index.records().to_vec())
}
