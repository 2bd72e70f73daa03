use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{CourseRecord, RecommendationDocument},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub user_id: Option<String>,
    pub count: Option<usize>,
}

/// Handler for the recommendation endpoint.
///
/// Validates parameters before any computation, looks up the user's
/// profile, ranks the catalog, persists the result keyed by user ID, and
/// returns the ordered course list.
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendQuery>,
) -> AppResult<Json<Vec<CourseRecord>>> {
    let user_id = params
        .user_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::InvalidParameter("user_id is required".to_string()))?;

    let count = params.count.unwrap_or(state.limits.default_count);
    if count == 0 || count > state.limits.max_count {
        return Err(AppError::InvalidParameter(format!(
            "count must be between 1 and {}",
            state.limits.max_count
        )));
    }

    let user = state
        .store
        .fetch_user(&user_id)
        .await?
        .ok_or_else(|| AppError::UserNotFound(user_id.clone()))?;

    let courses = state.index.recommend(&user, count);

    tracing::info!(
        user_id = %user_id,
        requested = count,
        returned = courses.len(),
        "Recommendations computed"
    );

    let document = RecommendationDocument {
        courses: courses.clone(),
        generated_at: Utc::now(),
    };
    state.store.save_recommendations(&user_id, &document).await?;

    Ok(Json(courses))
}

/// Handler returning the recommendation list most recently persisted for a
/// user.
pub async fn get_saved(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<RecommendationDocument>> {
    state
        .store
        .fetch_recommendations(&user_id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!("no recommendations stored for user {}", user_id))
        })
}
