//! HTTP route handlers.

pub mod import;
pub mod settings;
pub mod stacks;
