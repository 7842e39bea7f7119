//! Foundation module - Shared domain primitives.
//!
//! Contains the validation error type and the text normalization helpers used
//! when raw form input becomes a meeting record.

mod errors;
mod text;

pub use errors::ValidationError;
pub use text::{is_blank, non_blank_lines, normalize_entries, or_placeholder, PLACEHOLDER};
