//! Error types for focusaurus-core.

use thiserror::Error;

/// Result type alias using ImportError.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Errors that can occur during a delimited-text import session.
///
/// All of these are recoverable: the session stays in a well-defined,
/// retryable state after any of them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    #[error("no content to import")]
    EmptyInput,

    #[error("could not analyze file structure")]
    Analysis,

    #[error("stack name is required")]
    MissingStackName,

    #[error("at least one column must be assigned to the front")]
    NoFrontColumns,

    #[error("at least one column must be assigned to the back")]
    NoBackColumns,

    #[error("no valid cards found with the selected configuration")]
    NoValidCards,
}
