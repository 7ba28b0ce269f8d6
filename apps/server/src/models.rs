//! Request and response types for the HTTP API

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from focusaurus-core
pub use focusaurus_core::types::{
    Card, Column, Face, GlobalSettings, GoalKind, Separator, Stack, StudyGoal, TodayStats,
};
use focusaurus_core::{ImportSession, ImportStep};

// === Import session types ===

/// POST /api/import/sessions
#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    pub stack_name: Option<String>,
}

/// POST /api/import/sessions/:id/text
#[derive(Debug, Deserialize)]
pub struct SetTextRequest {
    pub content: String,
}

/// POST /api/import/sessions/:id/file
#[derive(Debug, Deserialize)]
pub struct LoadFileRequest {
    pub path: String,
}

/// PATCH /api/import/sessions/:id/options
#[derive(Debug, Default, Deserialize)]
pub struct UpdateOptionsRequest {
    pub stack_name: Option<String>,
    pub has_headers: Option<bool>,
    pub separator: Option<Separator>,
}

/// Body for assigning or unassigning a column.
#[derive(Debug, Deserialize)]
pub struct AssignmentRequest {
    pub face: Face,
    pub column: usize,
}

/// Snapshot of an import session returned by every session endpoint.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub step: ImportStep,
    pub stack_name: String,
    pub separator: Separator,
    pub has_headers: bool,
    pub columns: Vec<Column>,
    pub front_columns: Vec<usize>,
    pub back_columns: Vec<usize>,
    pub preview: Vec<Card>,
    pub total_cards: usize,
    pub skipped_rows: usize,
}

impl SessionView {
    pub fn of(id: Uuid, session: &ImportSession) -> Self {
        let config = session.config();
        Self {
            id,
            step: session.step(),
            stack_name: session.stack_name().to_string(),
            separator: config.separator,
            has_headers: config.has_headers,
            columns: session.columns().to_vec(),
            front_columns: config.front_columns.clone(),
            back_columns: config.back_columns.clone(),
            preview: session.preview().to_vec(),
            total_cards: session.total_cards(),
            skipped_rows: session.skipped_rows(),
        }
    }
}

// === Stack types ===

/// GET /api/stacks
#[derive(Debug, Serialize)]
pub struct StacksResponse {
    pub stacks: Vec<Stack>,
}

/// POST /api/stacks
#[derive(Debug, Deserialize)]
pub struct CreateStackRequest {
    pub name: String,
}

/// PUT /api/stacks/:id
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStackRequest {
    pub name: Option<String>,
    pub cards: Option<Vec<Card>>,
}

/// POST /api/stacks/:id/cards
#[derive(Debug, Deserialize)]
pub struct AddCardRequest {
    pub front: String,
    pub back: String,
}

// === Settings types ===

/// PUT /api/settings
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingsRequest {
    pub use_global_goals: Option<bool>,
    pub default_time_goal: Option<u32>,
    pub default_words_goal: Option<u32>,
}
