//! Import session endpoints.
//!
//! A session is created empty, fed raw text (pasted or read from a file),
//! configured column by column, and confirmed into the stack store. The
//! session is discarded on confirm or explicit delete.

use std::path::Path;

use axum::{
    extract::{Path as UrlPath, State},
    Json,
};
use uuid::Uuid;

use focusaurus_core::{ImportError, ImportSession, Stack};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::store::StackStore;
use crate::AppState;

/// POST /api/import/sessions
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<SessionView>> {
    let mut session = ImportSession::new();
    if let Some(name) = request.stack_name {
        session.set_stack_name(name);
    }

    let id = Uuid::new_v4();
    let view = SessionView::of(id, &session);
    state.sessions().insert(id, session);

    tracing::debug!(session_id = %id, "import session created");
    Ok(Json(view))
}

/// GET /api/import/sessions/:id
pub async fn show(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<Uuid>,
) -> Result<Json<SessionView>> {
    let sessions = state.sessions();
    let session = sessions
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("import session {id}")))?;
    Ok(Json(SessionView::of(id, session)))
}

/// POST /api/import/sessions/:id/text
pub async fn set_text(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<Uuid>,
    Json(request): Json<SetTextRequest>,
) -> Result<Json<SessionView>> {
    let mut sessions = state.sessions();
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("import session {id}")))?;

    session.set_raw_text(&request.content)?;
    tracing::debug!(
        separator = session.config().separator.label(),
        columns = session.columns().len(),
        "analyzed raw text"
    );
    Ok(Json(SessionView::of(id, session)))
}

/// POST /api/import/sessions/:id/file
///
/// Reads the file asynchronously. The generation token issued before the
/// read makes a completion from a superseded selection a no-op instead of
/// clobbering newer state. A failed read surfaces as an analysis error,
/// the same condition the client shows for unparseable content.
pub async fn load_file(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<Uuid>,
    Json(request): Json<LoadFileRequest>,
) -> Result<Json<SessionView>> {
    let token = {
        let mut sessions = state.sessions();
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound(format!("import session {id}")))?;
        session.begin_file_load()
    };

    let content = tokio::fs::read_to_string(&request.path).await.map_err(|e| {
        tracing::warn!(path = %request.path, error = %e, "file read failed");
        ApiError::Import(ImportError::Analysis)
    })?;

    let file_name = Path::new(&request.path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut sessions = state.sessions();
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("import session {id}")))?;
    session.complete_file_load(token, &file_name, &content)?;

    Ok(Json(SessionView::of(id, session)))
}

/// PATCH /api/import/sessions/:id/options
pub async fn update_options(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<Uuid>,
    Json(request): Json<UpdateOptionsRequest>,
) -> Result<Json<SessionView>> {
    let mut sessions = state.sessions();
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("import session {id}")))?;

    if let Some(name) = request.stack_name {
        session.set_stack_name(name);
    }
    if let Some(has_headers) = request.has_headers {
        session.set_has_headers(has_headers)?;
    }
    if let Some(separator) = request.separator {
        session.set_separator(separator)?;
    }

    Ok(Json(SessionView::of(id, session)))
}

/// POST /api/import/sessions/:id/assignments
pub async fn assign(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<Uuid>,
    Json(request): Json<AssignmentRequest>,
) -> Result<Json<SessionView>> {
    let mut sessions = state.sessions();
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("import session {id}")))?;

    session.assign(request.face, request.column);
    Ok(Json(SessionView::of(id, session)))
}

/// DELETE /api/import/sessions/:id/assignments
pub async fn unassign(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<Uuid>,
    Json(request): Json<AssignmentRequest>,
) -> Result<Json<SessionView>> {
    let mut sessions = state.sessions();
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("import session {id}")))?;

    session.unassign(request.face, request.column);
    Ok(Json(SessionView::of(id, session)))
}

/// POST /api/import/sessions/:id/confirm
///
/// Validates the configuration, materializes the full card set, hands
/// the stack to the store, and drops the session.
pub async fn confirm(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<Uuid>,
) -> Result<Json<Stack>> {
    let mut sessions = state.sessions();
    let session = sessions
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("import session {id}")))?;

    let stack = session.finish()?;
    sessions.remove(&id);

    state.store().insert(stack.clone());

    tracing::info!(
        stack = %stack.name,
        cards = stack.cards.len(),
        "imported stack"
    );
    Ok(Json(stack))
}

/// DELETE /api/import/sessions/:id
pub async fn destroy(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let removed = state.sessions().remove(&id).is_some();
    Ok(Json(serde_json::json!({ "deleted": removed })))
}
