//! Import session: the state machine driving the import dialog.
//!
//! One session owns one [`ImportConfig`] plus the structure derived from
//! it (columns, bounded preview, totals). Every mutation keeps the
//! preview in sync; every error leaves the session retryable.

use serde::{Deserialize, Serialize};

use crate::analyze::{analyze, detect_separator};
use crate::error::{ImportError, Result};
use crate::materialize::{materialize, preview};
use crate::types::{Card, Column, Face, ImportConfig, Separator, Stack};

/// Which screen of the import flow the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStep {
    Upload,
    Configure,
}

/// Token handed out when a file load starts; a completion carrying a
/// stale token is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// State of one import dialog, from raw text to a finished stack.
#[derive(Debug, Clone)]
pub struct ImportSession {
    stack_name: String,
    step: ImportStep,
    config: ImportConfig,
    columns: Vec<Column>,
    preview: Vec<Card>,
    total_cards: usize,
    skipped_rows: usize,
    load_generation: u64,
}

impl Default for ImportSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportSession {
    pub fn new() -> Self {
        Self {
            stack_name: String::new(),
            step: ImportStep::Upload,
            config: ImportConfig {
                has_headers: true,
                ..ImportConfig::default()
            },
            columns: Vec::new(),
            preview: Vec::new(),
            total_cards: 0,
            skipped_rows: 0,
            load_generation: 0,
        }
    }

    pub fn stack_name(&self) -> &str {
        &self.stack_name
    }

    pub fn set_stack_name(&mut self, name: impl Into<String>) {
        self.stack_name = name.into();
    }

    pub fn step(&self) -> ImportStep {
        self.step
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn preview(&self) -> &[Card] {
        &self.preview
    }

    /// Card count of a full materialization under the current
    /// configuration.
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Data rows the current configuration drops.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Start an asynchronous file load.
    ///
    /// The returned token must be passed back on completion; only the
    /// most recently issued token is accepted, so a read superseded by a
    /// newer selection cannot overwrite fresher state.
    pub fn begin_file_load(&mut self) -> LoadToken {
        self.load_generation += 1;
        LoadToken(self.load_generation)
    }

    /// Complete a file load started with [`Self::begin_file_load`].
    ///
    /// Stale completions are dropped without touching the session. A
    /// fresh one derives a default stack name from the file name when
    /// none was set, then runs the normal analysis path.
    pub fn complete_file_load(
        &mut self,
        token: LoadToken,
        file_name: &str,
        content: &str,
    ) -> Result<()> {
        if token.0 != self.load_generation {
            return Ok(());
        }

        if self.stack_name.is_empty() {
            self.stack_name = default_stack_name(file_name);
        }
        self.set_raw_text(content)
    }

    /// Accept raw text (pasted or file-loaded) and analyze it.
    ///
    /// Empty text returns the session to the upload step. On analysis
    /// failure the prior state is left unchanged. Otherwise the separator
    /// is auto-detected, columns are discovered, and the first two
    /// columns (when present) become the default front/back assignment.
    pub fn set_raw_text(&mut self, content: &str) -> Result<()> {
        if content.trim().is_empty() {
            self.clear_structure();
            self.config.raw_text.clear();
            self.step = ImportStep::Upload;
            return Ok(());
        }

        let separator = detect_separator(content);
        let columns = analyze(content, separator, self.config.has_headers)?;

        self.config.raw_text = content.to_string();
        self.config.separator = separator;
        self.columns = columns;
        self.step = ImportStep::Configure;

        self.config.front_columns.clear();
        self.config.back_columns.clear();
        if self.columns.len() >= 2 {
            self.config.front_columns.push(0);
            self.config.back_columns.push(1);
        }
        self.refresh_preview();
        Ok(())
    }

    /// Toggle header handling and re-derive columns and preview.
    ///
    /// Column count is unaffected, so the current assignment stays.
    pub fn set_has_headers(&mut self, has_headers: bool) -> Result<()> {
        if self.config.raw_text.trim().is_empty() {
            self.config.has_headers = has_headers;
            return Ok(());
        }

        let columns = analyze(&self.config.raw_text, self.config.separator, has_headers)?;
        self.config.has_headers = has_headers;
        self.columns = columns;
        self.refresh_preview();
        Ok(())
    }

    /// Override the auto-detected separator.
    ///
    /// Column positions can shift arbitrarily under a new separator, so
    /// the assignment resets to the default first-two mapping.
    pub fn set_separator(&mut self, separator: Separator) -> Result<()> {
        if self.config.raw_text.trim().is_empty() {
            self.config.separator = separator;
            return Ok(());
        }

        let columns = analyze(&self.config.raw_text, separator, self.config.has_headers)?;
        self.config.separator = separator;
        self.columns = columns;

        self.config.front_columns.clear();
        self.config.back_columns.clear();
        if self.columns.len() >= 2 {
            self.config.front_columns.push(0);
            self.config.back_columns.push(1);
        }
        self.refresh_preview();
        Ok(())
    }

    /// Assign a column to a face and refresh the preview.
    pub fn assign(&mut self, face: Face, index: usize) {
        self.config.assign(face, index);
        self.refresh_preview();
    }

    /// Remove a column from a face and refresh the preview.
    pub fn unassign(&mut self, face: Face, index: usize) {
        self.config.unassign(face, index);
        self.refresh_preview();
    }

    /// Return to the upload step, dropping structure and assignment.
    pub fn back_to_upload(&mut self) {
        self.clear_structure();
        self.step = ImportStep::Upload;
    }

    /// Validate the configuration and materialize the full stack.
    ///
    /// No partial stack is ever produced: the first failing check aborts
    /// with a field-specific error, and a configuration that yields zero
    /// cards is its own error.
    pub fn finish(&self) -> Result<Stack> {
        let name = self.stack_name.trim();
        if name.is_empty() {
            return Err(ImportError::MissingStackName);
        }
        if self.config.front_columns.is_empty() {
            return Err(ImportError::NoFrontColumns);
        }
        if self.config.back_columns.is_empty() {
            return Err(ImportError::NoBackColumns);
        }

        let outcome = materialize(&self.config);
        if outcome.cards.is_empty() {
            return Err(ImportError::NoValidCards);
        }

        let mut stack = Stack::new(name);
        stack.cards = outcome.cards;
        Ok(stack)
    }

    fn refresh_preview(&mut self) {
        self.preview = preview(&self.config);
        let outcome = materialize(&self.config);
        self.total_cards = outcome.cards.len();
        self.skipped_rows = outcome.skipped_rows;
    }

    fn clear_structure(&mut self) {
        self.columns.clear();
        self.config.front_columns.clear();
        self.config.back_columns.clear();
        self.preview.clear();
        self.total_cards = 0;
        self.skipped_rows = 0;
    }
}

/// Default stack name from an uploaded file name, minus the extension.
fn default_stack_name(file_name: &str) -> String {
    file_name
        .strip_suffix(".csv")
        .or_else(|| file_name.strip_suffix(".txt"))
        .unwrap_or(file_name)
        .to_string()
}
