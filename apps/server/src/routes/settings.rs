//! Settings endpoints

use axum::{extract::State, Json};

use focusaurus_core::GlobalSettings;

use crate::error::Result;
use crate::models::UpdateSettingsRequest;
use crate::AppState;

/// GET /api/settings
pub async fn get_all(State(state): State<AppState>) -> Result<Json<GlobalSettings>> {
    let settings = state.settings();
    Ok(Json(settings.clone()))
}

/// PUT /api/settings
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<GlobalSettings>> {
    let mut current = state.settings();

    if let Some(use_global_goals) = request.use_global_goals {
        current.use_global_goals = use_global_goals;
    }
    if let Some(default_time_goal) = request.default_time_goal {
        current.default_time_goal = default_time_goal;
    }
    if let Some(default_words_goal) = request.default_words_goal {
        current.default_words_goal = default_words_goal;
    }

    Ok(Json(current.clone()))
}
