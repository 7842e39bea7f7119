//! Domain layer containing the minutes vocabulary and the document block model.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (validation errors, text normalization)
//! - `minutes` - The meeting record, render options and date humanization
//! - `document` - Format-agnostic styled block model produced by layout

pub mod document;
pub mod foundation;
pub mod minutes;
