//! Core types for the Focusaurus flashcard application.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Field separator for delimited import text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Separator {
    Comma,
    Semicolon,
    Tab,
}

impl Default for Separator {
    fn default() -> Self {
        Self::Comma
    }
}

impl Separator {
    /// The literal character used as field boundary.
    pub fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Semicolon => ';',
            Self::Tab => '\t',
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Tab => "tab",
        }
    }
}

/// Which face of a card a column feeds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Front,
    Back,
}

/// A single flashcard. Both faces are non-empty by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub front: String,
    pub back: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mastered: Option<bool>,
}

/// Per-stack progress counters for the current day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodayStats {
    pub words_studied: u32,
    pub time_spent_minutes: u32,
    pub accuracy_percent: u32,
}

/// Kind of study goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    Time,
    Words,
}

/// A per-session study goal, optionally remembered on the stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyGoal {
    pub kind: GoalKind,
    pub target: u32,
    pub remember_setting: bool,
}

/// A named collection of cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stack {
    pub id: String,
    pub name: String,
    pub cards: Vec<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_studied: Option<NaiveDate>,
    pub today_stats: TodayStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_goal: Option<StudyGoal>,
}

impl Stack {
    /// Create a new empty stack with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            cards: Vec::new(),
            last_studied: None,
            today_stats: TodayStats::default(),
            saved_goal: None,
        }
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    pub use_global_goals: bool,
    pub default_time_goal: u32,
    pub default_words_goal: u32,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            use_global_goals: false,
            default_time_goal: 15,
            default_words_goal: 10,
        }
    }
}

/// A column discovered during structural analysis.
///
/// Positionally stable for the lifetime of one analysis pass; sample
/// values are for preview display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub index: usize,
    pub header: String,
    pub sample_values: Vec<String>,
}

/// Ephemeral import configuration.
///
/// Fully determines the materialized card set: materialization is a pure
/// function of this value. Discarded when the import session ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportConfig {
    pub raw_text: String,
    pub separator: Separator,
    pub has_headers: bool,
    pub front_columns: Vec<usize>,
    pub back_columns: Vec<usize>,
}

impl ImportConfig {
    /// Append a column to a face. Idempotent: already-assigned indices
    /// are left alone, and the other face is never touched.
    pub fn assign(&mut self, face: Face, index: usize) {
        let set = self.face_columns_mut(face);
        if !set.contains(&index) {
            set.push(index);
        }
    }

    /// Remove a column from one face only.
    pub fn unassign(&mut self, face: Face, index: usize) {
        self.face_columns_mut(face).retain(|&i| i != index);
    }

    /// The ordered column set for a face.
    pub fn face_columns(&self, face: Face) -> &[usize] {
        match face {
            Face::Front => &self.front_columns,
            Face::Back => &self.back_columns,
        }
    }

    fn face_columns_mut(&mut self, face: Face) -> &mut Vec<usize> {
        match face {
            Face::Front => &mut self.front_columns,
            Face::Back => &mut self.back_columns,
        }
    }
}
