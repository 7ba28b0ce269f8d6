//! Stack CRUD endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use focusaurus_core::{Card, Stack, StudyGoal};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::store::StackStore;
use crate::AppState;

/// GET /api/stacks
pub async fn list(State(state): State<AppState>) -> Result<Json<StacksResponse>> {
    let store = state.store();
    Ok(Json(StacksResponse {
        stacks: store.list(),
    }))
}

/// POST /api/stacks
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateStackRequest>,
) -> Result<Json<Stack>> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("stack name is required".to_string()));
    }

    let stack = Stack::new(name);
    let mut store = state.store();
    store.insert(stack.clone());
    Ok(Json(stack))
}

/// GET /api/stacks/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Stack>> {
    let store = state.store();
    let stack = store
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("stack {id}")))?;
    Ok(Json(stack.clone()))
}

/// PUT /api/stacks/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateStackRequest>,
) -> Result<Json<Stack>> {
    let mut store = state.store();
    let stack = store
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("stack {id}")))?;

    if let Some(name) = request.name {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ApiError::BadRequest("stack name is required".to_string()));
        }
        stack.name = name;
    }
    if let Some(cards) = request.cards {
        stack.cards = cards;
    }

    Ok(Json(stack.clone()))
}

/// DELETE /api/stacks/:id
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let deleted = state.store().delete(&id);
    Ok(Json(serde_json::json!({ "deleted": deleted })))
}

/// POST /api/stacks/:id/cards
pub async fn add_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddCardRequest>,
) -> Result<Json<Stack>> {
    let front = request.front.trim().to_string();
    let back = request.back.trim().to_string();
    if front.is_empty() || back.is_empty() {
        return Err(ApiError::BadRequest(
            "both front and back are required".to_string(),
        ));
    }

    let mut store = state.store();
    let stack = store
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("stack {id}")))?;

    stack.cards.push(Card {
        id: Uuid::new_v4().to_string(),
        front,
        back,
        mastered: None,
    });
    Ok(Json(stack.clone()))
}

/// PUT /api/stacks/:id/goal
///
/// A goal with `remember_setting` set is saved on the stack; one without
/// clears any previously remembered goal.
pub async fn save_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(goal): Json<StudyGoal>,
) -> Result<Json<Stack>> {
    let mut store = state.store();
    let stack = store
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("stack {id}")))?;

    stack.saved_goal = if goal.remember_setting {
        Some(goal)
    } else {
        None
    };
    Ok(Json(stack.clone()))
}
