//! Test fixtures and factory functions for creating test data.

use serde_json::json;

/// A small comma-separated vocabulary file with a header row.
pub const JAPANESE_CSV: &str = "Japanese,English\n犬,dog\n猫,cat\n";

/// Create a session creation request body.
pub fn create_session_request(stack_name: Option<&str>) -> serde_json::Value {
    match stack_name {
        Some(name) => json!({ "stack_name": name }),
        None => json!({}),
    }
}

/// Create a set-text request body.
pub fn set_text_request(content: &str) -> serde_json::Value {
    json!({ "content": content })
}

/// Create an assignment request body.
pub fn assignment_request(face: &str, column: usize) -> serde_json::Value {
    json!({ "face": face, "column": column })
}

/// Create a study goal request body.
pub fn study_goal_request(kind: &str, target: u32, remember: bool) -> serde_json::Value {
    json!({ "kind": kind, "target": target, "remember_setting": remember })
}
