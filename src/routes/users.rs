use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::UserProfileData,
    state::AppState,
};

/// Handler that creates or replaces the profile document used to build a
/// user's recommendation queries.
pub async fn upsert(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(profile): Json<UserProfileData>,
) -> AppResult<StatusCode> {
    if user_id.trim().is_empty() {
        return Err(AppError::InvalidParameter(
            "user_id is required".to_string(),
        ));
    }

    state.store.put_user(&user_id, &profile).await?;
    tracing::info!(user_id = %user_id, "User profile upserted");

    Ok(StatusCode::OK)
}
