//! Core import engine shared by the Focusaurus applications.
//!
//! Provides:
//! - Quote-aware line parser for delimited text (CSV, TSV, Anki exports)
//! - Structural analysis (separator detection, column discovery)
//! - Import session state machine with column-to-face assignment and
//!   live preview
//! - Card materialization
//! - Shared types (Card, Stack, StudyGoal, etc.)

pub mod analyze;
pub mod error;
pub mod materialize;
pub mod parser;
pub mod session;
pub mod types;

pub use analyze::{analyze, detect_separator};
pub use error::{ImportError, Result};
pub use materialize::{materialize, preview, Outcome};
pub use parser::split_line;
pub use session::{ImportSession, ImportStep, LoadToken};
pub use types::{
    Card, Column, Face, GlobalSettings, GoalKind, ImportConfig, Separator, Stack, StudyGoal,
    TodayStats,
};
